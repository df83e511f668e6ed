//! Adapters - Implementations of port interfaces.
//!
//! - `stripe` - Stripe API client and webhook verification, plus a mock
//!   provider for tests

pub mod stripe;

pub use stripe::{MockPaymentProvider, StripeConfig, StripePaymentAdapter};
