//! HelloHandler - connectivity smoke test.

use async_trait::async_trait;
use serde::Serialize;

use super::CommandHandler;
use crate::application::error::CommandError;
use crate::application::input::Input;

/// Fixed greeting returned by `hello`.
pub const HELLO_MESSAGE: &str = "Hello from Go!";

#[derive(Serialize)]
struct Greeting {
    message: &'static str,
}

/// Returns a fixed greeting without touching the network.
pub struct HelloHandler;

#[async_trait]
impl CommandHandler for HelloHandler {
    async fn handle(&self, _input: &Input) -> Result<Vec<u8>, CommandError> {
        Ok(serde_json::to_vec(&Greeting {
            message: HELLO_MESSAGE,
        })?)
    }
}
