//! Payment provider port for external payment processing.
//!
//! Defines the contract between the command handlers and the payment gateway
//! (Stripe). The port carries exactly three operations: read a customer,
//! create a customer, verify a webhook.
//!
//! # Design
//!
//! - **Raw responses**: customer operations return the provider's JSON body
//!   untouched, so callers see exactly what the provider sent
//! - **Inspectable requests**: outbound requests are plain data and can be
//!   asserted on before they reach the network
//! - **No retries**: a failed call is reported once

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Port for payment provider integrations.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Fetch a customer by provider ID.
    ///
    /// Returns the raw JSON body of the provider response.
    async fn get_customer(&self, customer_id: &str) -> Result<Vec<u8>, PaymentError>;

    /// Create a customer in the payment system.
    ///
    /// Returns the raw JSON body of the provider response.
    async fn create_customer(&self, request: CreateCustomerRequest)
        -> Result<Vec<u8>, PaymentError>;

    /// Verify a webhook signature against `secret` and parse the event.
    async fn verify_webhook(
        &self,
        payload: &[u8],
        signature: &str,
        secret: &SecretString,
    ) -> Result<WebhookEvent, PaymentError>;
}

/// Request to create a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    /// Free-form description shown in the dashboard.
    pub description: String,

    /// Customer email address.
    pub email: String,

    /// Preferred locales, most preferred first.
    pub preferred_locales: Vec<String>,
}

/// Verified webhook event envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Event ID from provider (evt_...).
    pub id: String,

    /// Event type (e.g. "customer.created").
    pub event_type: String,

    /// When the event occurred (Unix timestamp).
    pub created: i64,

    /// Whether the event came from live mode.
    pub livemode: bool,
}

/// Errors from payment provider operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentError {
    /// Error code for categorization.
    pub code: PaymentErrorCode,

    /// Human-readable message, as reported by the provider where available.
    pub message: String,

    /// Provider's error code (if available).
    pub provider_code: Option<String>,

    /// HTTP status of the failed response (if any).
    pub status: Option<u16>,
}

impl PaymentError {
    /// Create a new payment error.
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
            status: None,
        }
    }

    /// Attach the provider's error code.
    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// Attach the HTTP status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NetworkError, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::AuthenticationError, message)
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NotFound, message)
    }

    /// Create an invalid webhook error.
    pub fn invalid_webhook(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::InvalidWebhook, message)
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// API authentication failed.
    AuthenticationError,

    /// Request rejected as malformed or invalid.
    InvalidRequest,

    /// Card was declined or payment otherwise refused.
    CardDeclined,

    /// Resource not found.
    NotFound,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Invalid webhook signature or payload.
    InvalidWebhook,

    /// Provider API error.
    ProviderError,
}

impl PaymentErrorCode {
    /// Classify an HTTP error status.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 409 => PaymentErrorCode::InvalidRequest,
            401 | 403 => PaymentErrorCode::AuthenticationError,
            402 => PaymentErrorCode::CardDeclined,
            404 => PaymentErrorCode::NotFound,
            429 => PaymentErrorCode::RateLimitExceeded,
            _ => PaymentErrorCode::ProviderError,
        }
    }
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::NetworkError => "network_error",
            PaymentErrorCode::AuthenticationError => "authentication_error",
            PaymentErrorCode::InvalidRequest => "invalid_request",
            PaymentErrorCode::CardDeclined => "card_declined",
            PaymentErrorCode::NotFound => "not_found",
            PaymentErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            PaymentErrorCode::InvalidWebhook => "invalid_webhook",
            PaymentErrorCode::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}
