//! GetCustomerHandler - fetch a customer by Stripe ID.

use std::sync::Arc;

use async_trait::async_trait;

use super::CommandHandler;
use crate::application::error::CommandError;
use crate::application::input::Input;
use crate::ports::PaymentProvider;

/// Reads one customer and returns the provider's body verbatim.
///
/// Input: `stripe_id`.
pub struct GetCustomerHandler {
    payment_provider: Arc<dyn PaymentProvider>,
}

impl GetCustomerHandler {
    pub fn new(payment_provider: Arc<dyn PaymentProvider>) -> Self {
        Self { payment_provider }
    }
}

#[async_trait]
impl CommandHandler for GetCustomerHandler {
    async fn handle(&self, input: &Input) -> Result<Vec<u8>, CommandError> {
        let stripe_id = input.require("stripe_id")?;
        // An empty ID would address the customer list endpoint instead.
        if stripe_id.is_empty() {
            return Err(CommandError::MissingField("stripe_id"));
        }

        let body = self.payment_provider.get_customer(stripe_id).await?;
        Ok(body)
    }
}
