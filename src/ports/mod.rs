//! Ports - Interfaces for external dependencies.
//!
//! Ports define the contracts between the command handlers and the outside
//! world. Adapters implement these ports.
//!
//! - `PaymentProvider` - customer operations and webhook verification

mod payment_provider;

pub use payment_provider::{
    CreateCustomerRequest, PaymentError, PaymentErrorCode, PaymentProvider, WebhookEvent,
};
