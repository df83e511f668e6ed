//! Command handlers.
//!
//! Each handler runs one command: it validates its input keys, delegates to
//! the payment provider where needed, and returns a raw JSON result.

mod get_customer;
mod hello;
mod new_customer;
mod verify_webhook;

use async_trait::async_trait;

use super::error::CommandError;
use super::input::Input;

pub use get_customer::GetCustomerHandler;
pub use hello::{HelloHandler, HELLO_MESSAGE};
pub use new_customer::{NewCustomerHandler, PREFERRED_LOCALES};
pub use verify_webhook::VerifyWebhookHandler;

/// A single CLI command.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Run the command, returning a raw JSON document on success.
    async fn handle(&self, input: &Input) -> Result<Vec<u8>, CommandError>;
}
