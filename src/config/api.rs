//! Stripe API configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Default Stripe API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com";

/// Stripe API endpoint settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL requests are sent to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Pinned `Stripe-Version` header (account default when unset)
    #[serde(default)]
    pub version: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            version: None,
        }
    }
}

impl ApiConfig {
    /// Validate API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ValidationError::InvalidBaseUrl(e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ValidationError::InvalidBaseUrl(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }
        if url.cannot_be_a_base() {
            return Err(ValidationError::InvalidBaseUrl(self.base_url.clone()));
        }

        Ok(())
    }
}
