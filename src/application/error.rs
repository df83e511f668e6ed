//! Command errors.
//!
//! Every variant ends up in the error envelope as
//! `error running <command>: <display text>`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::ports::PaymentError;

/// Errors produced while decoding, dispatching or running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The JSON argument could not be decoded into a string map.
    #[error("invalid JSON data: {0}")]
    Decode(String),

    /// No handler is registered under this name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A handler's required input key is absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Pass-through failure from the payment provider.
    #[error("{message}")]
    ExternalApi { message: String },

    /// Webhook verification failed. The reason is not exposed.
    #[error("verification_failed")]
    VerificationFailed,

    /// The handler produced bytes that are not a JSON document.
    #[error("invalid JSON in result: {0}")]
    InvalidResult(String),

    /// A result payload could not be encoded.
    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),

    /// Configuration could not be loaded or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<PaymentError> for CommandError {
    fn from(err: PaymentError) -> Self {
        CommandError::ExternalApi {
            message: err.message,
        }
    }
}
