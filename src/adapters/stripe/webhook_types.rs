//! Stripe wire types.
//!
//! These types represent Stripe JSON as it arrives in webhook payloads and
//! error responses. Customer bodies are never modelled here: they are passed
//! through to the caller untouched.

use serde::Deserialize;
use thiserror::Error;

// ════════════════════════════════════════════════════════════════════════════════
// Signature Parsing
// ════════════════════════════════════════════════════════════════════════════════

/// Error parsing the Stripe-Signature header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureParseError {
    /// Header is empty or missing.
    #[error("Missing Stripe-Signature header")]
    MissingHeader,
    /// A comma-separated element is not a `key=value` pair.
    #[error("Malformed element in signature header: {0}")]
    MalformedElement(String),
    /// Missing timestamp component (t=...).
    #[error("Missing timestamp (t=) in signature")]
    MissingTimestamp,
    /// Missing v1 signature component.
    #[error("Missing v1 signature in header")]
    MissingV1Signature,
    /// Timestamp is not a non-negative integer.
    #[error("Invalid timestamp format")]
    InvalidTimestamp,
    /// Invalid signature format (not valid hex).
    #[error("Invalid signature format (not valid hex)")]
    InvalidSignatureFormat,
}

/// Parsed Stripe-Signature header components.
///
/// The header format is: `t=timestamp,v1=signature[,v1=signature...]`. Other
/// schemes, such as the legacy `v0`, are ignored.
///
/// Stripe sends one `v1` entry per active endpoint secret, so more than one
/// appears while a secret is being rolled.
///
/// # Example
///
/// ```ignore
/// let header = "t=1704067200,v1=abc123def456...";
/// let parsed = SignatureHeader::parse(header)?;
/// assert_eq!(parsed.timestamp, 1704067200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    /// Unix timestamp when Stripe signed the event.
    pub timestamp: i64,

    /// v1 signatures (HMAC-SHA256, hex-decoded), in header order.
    pub v1_signatures: Vec<Vec<u8>>,
}

impl SignatureHeader {
    /// Parse a Stripe-Signature header into components.
    pub fn parse(header: &str) -> Result<Self, SignatureParseError> {
        if header.trim().is_empty() {
            return Err(SignatureParseError::MissingHeader);
        }

        let mut timestamp: Option<i64> = None;
        let mut v1_signatures: Vec<Vec<u8>> = Vec::new();

        for part in header.split(',') {
            let (key, value) = part
                .split_once('=')
                .ok_or_else(|| SignatureParseError::MalformedElement(part.trim().to_string()))?;
            let value = value.trim();

            match key.trim() {
                "t" => {
                    let parsed: i64 = value
                        .parse()
                        .map_err(|_| SignatureParseError::InvalidTimestamp)?;
                    if parsed < 0 {
                        return Err(SignatureParseError::InvalidTimestamp);
                    }
                    timestamp = Some(parsed);
                }
                "v1" => {
                    let signature = hex::decode(value)
                        .map_err(|_| SignatureParseError::InvalidSignatureFormat)?;
                    v1_signatures.push(signature);
                }
                _ => {
                    // Ignore unknown fields for forward compatibility
                }
            }
        }

        let timestamp = timestamp.ok_or(SignatureParseError::MissingTimestamp)?;
        if v1_signatures.is_empty() {
            return Err(SignatureParseError::MissingV1Signature);
        }

        Ok(Self {
            timestamp,
            v1_signatures,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Stripe Event Types
// ════════════════════════════════════════════════════════════════════════════════

/// The parts of a Stripe event envelope this crate reads.
///
/// Everything else in the payload, including `data`, is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeWebhookEvent {
    /// Unique event identifier (evt_...).
    pub id: String,

    /// Event type (e.g., "customer.created").
    #[serde(rename = "type")]
    pub event_type: String,

    /// Unix timestamp when the event was created.
    #[serde(default)]
    pub created: i64,

    /// Whether this is a live or test event.
    #[serde(default)]
    pub livemode: bool,
}

// ════════════════════════════════════════════════════════════════════════════════
// Stripe Error Types
// ════════════════════════════════════════════════════════════════════════════════

/// Error body returned by the Stripe API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorResponse {
    pub error: StripeApiError,
}

/// Stripe API error object.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeApiError {
    /// Short machine-readable code (e.g. "resource_missing").
    pub code: Option<String>,

    /// Human-readable message.
    pub message: Option<String>,
}
