//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Webhook tolerance must be between 1 and 86400 seconds")]
    InvalidWebhookTolerance,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
