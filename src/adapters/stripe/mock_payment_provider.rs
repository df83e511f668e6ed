//! Mock payment provider for testing.
//!
//! Provides a configurable mock implementation of `PaymentProvider` for unit
//! and integration tests. Supports:
//! - Pre-configured raw customer bodies
//! - Error injection
//! - Call tracking and captured outbound requests
//! - Webhook verification outcomes

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use secrecy::SecretString;

use crate::ports::{CreateCustomerRequest, PaymentError, PaymentProvider, WebhookEvent};

/// Mock payment provider for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentProvider::new();
///
/// // Configure responses
/// mock.add_customer("cus_123", br#"{"id":"cus_123"}"#);
///
/// // Inject errors
/// mock.set_method_error("get_customer", PaymentError::network("offline"));
///
/// // Inspect what the handler sent
/// let sent = mock.created_requests();
/// ```
#[derive(Default)]
pub struct MockPaymentProvider {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

/// Internal mutable state.
#[derive(Default)]
struct MockState {
    /// Raw customer bodies by ID.
    customers: HashMap<String, Vec<u8>>,

    /// Raw body to return on the next `create_customer` call.
    next_created: Option<Vec<u8>>,

    /// Every request passed to `create_customer`, in order.
    created_requests: Vec<CreateCustomerRequest>,

    /// Counter for generated customer IDs.
    created_count: usize,

    /// Error to return on next call.
    next_error: Option<PaymentError>,

    /// Specific errors by method name.
    method_errors: HashMap<String, PaymentError>,

    /// Track method calls for assertions.
    call_log: Vec<MethodCall>,

    /// Webhook verification behavior.
    webhook_verify_mode: WebhookVerifyMode,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

/// How to handle webhook verification.
#[derive(Default, Clone)]
enum WebhookVerifyMode {
    /// Accept any signature and parse the payload.
    #[default]
    AcceptAll,

    /// Accept only this exact signature header.
    RequireSignature(String),

    /// Always fail verification with this reason.
    AlwaysFail(String),
}

impl MockPaymentProvider {
    /// Create a new mock provider with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails all webhook verifications with `reason`.
    pub fn rejecting_webhooks(reason: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.state().webhook_verify_mode = WebhookVerifyMode::AlwaysFail(reason.into());
        mock
    }

    /// Create a mock that only accepts the given signature header.
    pub fn requiring_signature(signature: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.state().webhook_verify_mode = WebhookVerifyMode::RequireSignature(signature.into());
        mock
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Add a customer body to the "database".
    pub fn add_customer(&self, id: &str, body: impl Into<Vec<u8>>) {
        self.state().customers.insert(id.to_string(), body.into());
    }

    /// Set the raw body to return on the next `create_customer` call.
    pub fn set_created_customer(&self, body: impl Into<Vec<u8>>) {
        self.state().next_created = Some(body.into());
    }

    /// Set an error to return on the next call to any method.
    pub fn set_error(&self, error: PaymentError) {
        self.state().next_error = Some(error);
    }

    /// Set an error for a specific method.
    pub fn set_method_error(&self, method: &str, error: PaymentError) {
        self.state().method_errors.insert(method.to_string(), error);
    }

    /// Clear all configured errors.
    pub fn clear_errors(&self) {
        let mut state = self.state();
        state.next_error = None;
        state.method_errors.clear();
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// Get all recorded method calls.
    pub fn calls(&self) -> Vec<MethodCall> {
        self.state().call_log.clone()
    }

    /// Check if a method was called.
    pub fn was_called(&self, method: &str) -> bool {
        self.state().call_log.iter().any(|c| c.method == method)
    }

    /// Get count of calls to a method.
    pub fn call_count(&self, method: &str) -> usize {
        self.state()
            .call_log
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    /// Requests received by `create_customer`, in call order.
    pub fn created_requests(&self) -> Vec<CreateCustomerRequest> {
        self.state().created_requests.clone()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Internal Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record_call(&self, method: &str, args: Vec<String>) {
        self.state().call_log.push(MethodCall {
            method: method.to_string(),
            args,
        });
    }

    fn check_error(&self, method: &str) -> Result<(), PaymentError> {
        let mut state = self.state();

        // Check method-specific error first
        if let Some(error) = state.method_errors.get(method) {
            return Err(error.clone());
        }

        // Check global error (consumes it)
        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        Ok(())
    }
}

impl Clone for MockPaymentProvider {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn get_customer(&self, customer_id: &str) -> Result<Vec<u8>, PaymentError> {
        self.record_call("get_customer", vec![customer_id.to_string()]);
        self.check_error("get_customer")?;

        let body = self.state().customers.get(customer_id).cloned();
        body.ok_or_else(|| {
            PaymentError::not_found(format!("No such customer: '{}'", customer_id))
                .with_provider_code("resource_missing")
                .with_status(404)
        })
    }

    async fn create_customer(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<Vec<u8>, PaymentError> {
        self.record_call(
            "create_customer",
            vec![request.description.clone(), request.email.clone()],
        );
        self.check_error("create_customer")?;

        let mut state = self.state();
        state.created_requests.push(request.clone());
        state.created_count += 1;

        let body = match state.next_created.take() {
            Some(body) => body,
            None => {
                let customer = serde_json::json!({
                    "id": format!("cus_mock_{}", state.created_count),
                    "object": "customer",
                    "description": request.description,
                    "email": request.email,
                    "preferred_locales": request.preferred_locales,
                });
                serde_json::to_vec(&customer)
                    .map_err(|e| PaymentError::network(format!("mock encode failed: {}", e)))?
            }
        };

        if let Some(id) = serde_json::from_slice::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v["id"].as_str().map(String::from))
        {
            state.customers.insert(id, body.clone());
        }

        Ok(body)
    }

    async fn verify_webhook(
        &self,
        payload: &[u8],
        signature: &str,
        _secret: &SecretString,
    ) -> Result<WebhookEvent, PaymentError> {
        self.record_call(
            "verify_webhook",
            vec![
                String::from_utf8_lossy(payload).chars().take(50).collect(),
                signature.chars().take(20).collect(),
            ],
        );
        self.check_error("verify_webhook")?;

        let mode = self.state().webhook_verify_mode.clone();
        match mode {
            WebhookVerifyMode::AcceptAll => {}
            WebhookVerifyMode::RequireSignature(required) => {
                if signature != required {
                    return Err(PaymentError::invalid_webhook("Invalid signature"));
                }
            }
            WebhookVerifyMode::AlwaysFail(reason) => {
                return Err(PaymentError::invalid_webhook(reason));
            }
        }

        let parsed: serde_json::Value = serde_json::from_slice(payload)
            .map_err(|e| PaymentError::invalid_webhook(format!("Invalid JSON: {}", e)))?;

        Ok(WebhookEvent {
            id: parsed["id"].as_str().unwrap_or("evt_mock").to_string(),
            event_type: parsed["type"].as_str().unwrap_or("unknown").to_string(),
            created: parsed["created"]
                .as_i64()
                .unwrap_or_else(|| chrono::Utc::now().timestamp()),
            livemode: parsed["livemode"].as_bool().unwrap_or(false),
        })
    }
}
