//! Command registry and dispatch.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::error::CommandError;
use super::handlers::{
    CommandHandler, GetCustomerHandler, HelloHandler, NewCustomerHandler, VerifyWebhookHandler,
};
use super::input::Input;
use crate::ports::PaymentProvider;

/// Static map from command name to handler.
///
/// Adding a command means adding a handler and registering it in `new`.
pub struct CommandRegistry {
    handlers: BTreeMap<&'static str, Box<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// Register every command against the given provider.
    pub fn new(payment_provider: Arc<dyn PaymentProvider>) -> Self {
        let mut handlers: BTreeMap<&'static str, Box<dyn CommandHandler>> = BTreeMap::new();
        handlers.insert("hello", Box::new(HelloHandler));
        handlers.insert(
            "new_customer",
            Box::new(NewCustomerHandler::new(Arc::clone(&payment_provider))),
        );
        handlers.insert(
            "get_customer",
            Box::new(GetCustomerHandler::new(Arc::clone(&payment_provider))),
        );
        handlers.insert(
            "verify_webhook",
            Box::new(VerifyWebhookHandler::new(payment_provider)),
        );

        Self { handlers }
    }

    /// Find the handler for `command`.
    pub fn lookup(&self, command: &str) -> Result<&dyn CommandHandler, CommandError> {
        self.handlers
            .get(command)
            .map(|handler| handler.as_ref())
            .ok_or_else(|| CommandError::UnknownCommand(command.to_string()))
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    /// Decode the input, then run the named command.
    ///
    /// Input is decoded before the lookup, so malformed JSON is reported even
    /// for an unknown command.
    pub async fn dispatch(
        &self,
        command: &str,
        raw_input: Option<&str>,
    ) -> Result<Vec<u8>, CommandError> {
        let input = Input::decode(raw_input)?;
        let handler = self.lookup(command)?;

        tracing::debug!(command, keys = ?input.keys().collect::<Vec<_>>(), "Dispatching command");
        handler.handle(&input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockPaymentProvider;

    fn registry() -> (CommandRegistry, MockPaymentProvider) {
        let mock = MockPaymentProvider::new();
        (CommandRegistry::new(Arc::new(mock.clone())), mock)
    }

    #[test]
    fn registers_all_commands() {
        let (registry, _) = registry();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["get_customer", "hello", "new_customer", "verify_webhook"]
        );
    }

    #[test]
    fn unknown_command_is_named() {
        let (registry, _) = registry();
        let err = registry.lookup("foo").err().unwrap();
        assert_eq!(err.to_string(), "unknown command: foo");
    }

    #[tokio::test]
    async fn dispatch_hello_without_input() {
        let (registry, mock) = registry();

        let body = registry.dispatch("hello", None).await.unwrap();

        assert_eq!(body, br#"{"message":"Hello from Go!"}"#.to_vec());
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn bad_json_wins_over_unknown_command() {
        let (registry, _) = registry();

        let err = registry.dispatch("foo", Some("not-json")).await.unwrap_err();

        assert!(matches!(err, CommandError::Decode(_)));
    }

    #[tokio::test]
    async fn dispatch_routes_to_provider() {
        let (registry, mock) = registry();
        mock.add_customer("cus_9", br#"{"id":"cus_9"}"#.to_vec());

        let body = registry
            .dispatch("get_customer", Some(r#"{"stripe_id":"cus_9"}"#))
            .await
            .unwrap();

        assert_eq!(body, br#"{"id":"cus_9"}"#.to_vec());
        assert!(mock.was_called("get_customer"));
    }
}
