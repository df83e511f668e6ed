//! Application layer - input decoding, command dispatch and envelope output.
//!
//! Flow for one invocation: [`Input::decode`] → [`CommandRegistry::lookup`] →
//! [`CommandHandler::handle`] → [`envelope::emit`].

pub mod envelope;
mod error;
pub mod handlers;
mod input;
mod registry;

pub use error::CommandError;
pub use handlers::{CommandHandler, HELLO_MESSAGE, PREFERRED_LOCALES};
pub use input::Input;
pub use registry::CommandRegistry;
