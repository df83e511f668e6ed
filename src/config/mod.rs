//! Application configuration module
//!
//! Settings are loaded from environment variables using the `config` and
//! `dotenvy` crates. Variables carry the `STRIPE_BRIDGE__` prefix and nested
//! values use double underscores as separators. Every value has a default, so
//! an empty environment yields a usable configuration.
//!
//! The Stripe API key is not part of it: it arrives on the command line
//! and is handed straight to the adapter.
//!
//! # Example
//!
//! ```no_run
//! use stripe_bridge::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Talking to {}", config.api.base_url);
//! ```

mod api;
mod error;
mod log;
mod webhook;

pub use api::{ApiConfig, DEFAULT_API_BASE_URL};
pub use error::{ConfigError, ValidationError};
pub use log::{LogConfig, LogFormat};
pub use webhook::{WebhookConfig, DEFAULT_TOLERANCE_SECS};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Stripe API endpoint settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Webhook verification settings
    #[serde(default)]
    pub webhook: WebhookConfig,

    /// Log output settings
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `STRIPE_BRIDGE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `STRIPE_BRIDGE__API__BASE_URL=http://localhost:12111` -> `api.base_url`
    /// - `STRIPE_BRIDGE__WEBHOOK__TOLERANCE_SECS=600` -> `webhook.tolerance_secs`
    /// - `STRIPE_BRIDGE__LOG__LEVEL=debug` -> `log.level`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STRIPE_BRIDGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.webhook.validate()?;
        self.log.validate()?;
        Ok(())
    }
}
