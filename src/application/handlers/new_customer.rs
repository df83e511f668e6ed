//! NewCustomerHandler - create a customer.

use std::sync::Arc;

use async_trait::async_trait;

use super::CommandHandler;
use crate::application::error::CommandError;
use crate::application::input::Input;
use crate::ports::{CreateCustomerRequest, PaymentProvider};

/// Locales attached to every new customer, most preferred first.
pub const PREFERRED_LOCALES: [&str; 2] = ["en", "es"];

/// Creates a customer and returns the provider's body verbatim.
///
/// Input: `description`, `email`. Locales are fixed, not taken from input.
pub struct NewCustomerHandler {
    payment_provider: Arc<dyn PaymentProvider>,
}

impl NewCustomerHandler {
    pub fn new(payment_provider: Arc<dyn PaymentProvider>) -> Self {
        Self { payment_provider }
    }
}

#[async_trait]
impl CommandHandler for NewCustomerHandler {
    async fn handle(&self, input: &Input) -> Result<Vec<u8>, CommandError> {
        let request = CreateCustomerRequest {
            description: input.require("description")?.to_string(),
            email: input.require("email")?.to_string(),
            preferred_locales: PREFERRED_LOCALES.iter().map(|l| l.to_string()).collect(),
        };

        let body = self.payment_provider.create_customer(request).await?;
        Ok(body)
    }
}
