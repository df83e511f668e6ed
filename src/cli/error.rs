//! CLI-level errors

use thiserror::Error;

use crate::exitcode;

/// Errors raised before a command can run. These are printed as plain text,
/// never as a JSON envelope.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Usage: {0} <api_key> <command> [json_data]")]
    Usage(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) => exitcode::FAILURE,
        }
    }
}
