//! CLI layer: argument parsing

pub mod args;
pub mod error;

pub use args::Cli;
pub use error::CliError;
