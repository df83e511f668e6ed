//! VerifyWebhookHandler - check a webhook signature.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;
use serde::Serialize;

use super::CommandHandler;
use crate::application::error::CommandError;
use crate::application::input::Input;
use crate::ports::PaymentProvider;

#[derive(Serialize)]
struct Verified {
    status: &'static str,
}

/// Verifies a webhook delivery.
///
/// Input: `payload` (raw body), `signature` (Stripe-Signature header value),
/// `secret` (endpoint signing secret).
///
/// On success the event itself is discarded and `{"status":"verified"}` is
/// returned. Every failure collapses into `verification_failed`; the reason
/// never reaches the caller.
pub struct VerifyWebhookHandler {
    payment_provider: Arc<dyn PaymentProvider>,
}

impl VerifyWebhookHandler {
    pub fn new(payment_provider: Arc<dyn PaymentProvider>) -> Self {
        Self { payment_provider }
    }
}

#[async_trait]
impl CommandHandler for VerifyWebhookHandler {
    async fn handle(&self, input: &Input) -> Result<Vec<u8>, CommandError> {
        let payload = input.require("payload")?;
        let signature = input.require("signature")?;
        let secret = SecretString::new(input.require("secret")?.to_string());

        let event = self
            .payment_provider
            .verify_webhook(payload.as_bytes(), signature, &secret)
            .await
            .map_err(|e| {
                tracing::debug!(reason = %e, "Webhook verification failed");
                CommandError::VerificationFailed
            })?;

        tracing::debug!(event_id = %event.id, "Webhook verified");
        Ok(serde_json::to_vec(&Verified { status: "verified" })?)
    }
}
