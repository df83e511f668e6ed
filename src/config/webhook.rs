//! Webhook verification configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Default maximum age for signed webhook events (5 minutes).
pub const DEFAULT_TOLERANCE_SECS: i64 = 300;

const MAX_TOLERANCE_SECS: i64 = 86_400;

/// Webhook verification settings
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// Maximum accepted age of a signature timestamp, in seconds
    #[serde(default = "default_tolerance_secs")]
    pub tolerance_secs: i64,

    /// Reject events whose `livemode` flag is false
    #[serde(default)]
    pub require_livemode: bool,
}

fn default_tolerance_secs() -> i64 {
    DEFAULT_TOLERANCE_SECS
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            tolerance_secs: default_tolerance_secs(),
            require_livemode: false,
        }
    }
}

impl WebhookConfig {
    /// Validate webhook configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tolerance_secs < 1 || self.tolerance_secs > MAX_TOLERANCE_SECS {
            return Err(ValidationError::InvalidWebhookTolerance);
        }
        Ok(())
    }
}
