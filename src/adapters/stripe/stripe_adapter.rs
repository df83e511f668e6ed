//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` trait for Stripe API integration.
//! Customer reads and writes go over HTTPS with the secret key as basic-auth
//! username; webhook verification is local.
//!
//! # Security
//!
//! - HMAC-SHA256 signature verification with constant-time comparison
//! - Timestamp validation (configurable window, 5 minutes by default)
//! - API key handled via `secrecy::SecretString`
//!
//! # Configuration
//!
//! ```ignore
//! let config = StripeConfig::new(api_key).with_base_url("http://localhost:12111");
//! let adapter = StripePaymentAdapter::new(config);
//! ```

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use reqwest::header::USER_AGENT;
use reqwest::{RequestBuilder, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::config::{AppConfig, DEFAULT_API_BASE_URL, DEFAULT_TOLERANCE_SECS};
use crate::ports::{
    CreateCustomerRequest, PaymentError, PaymentErrorCode, PaymentProvider, WebhookEvent,
};

use super::webhook_types::{SignatureHeader, StripeErrorResponse, StripeWebhookEvent};

type HmacSha256 = Hmac<Sha256>;

/// Clock skew tolerance for future timestamps (60 seconds).
const MAX_FUTURE_TOLERANCE_SECS: i64 = 60;

const USER_AGENT_VALUE: &str = concat!("stripe-bridge/", env!("CARGO_PKG_VERSION"));

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Base URL for Stripe API (default: https://api.stripe.com).
    api_base_url: String,

    /// Value for the `Stripe-Version` header, if pinned.
    api_version: Option<String>,

    /// Maximum age of a webhook signature timestamp.
    webhook_tolerance_secs: i64,

    /// Whether to reject test mode webhook events.
    require_livemode: bool,
}

impl StripeConfig {
    /// Create a new Stripe configuration with default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_version: None,
            webhook_tolerance_secs: DEFAULT_TOLERANCE_SECS,
            require_livemode: false,
        }
    }

    /// Create configuration from the loaded application settings.
    pub fn from_app_config(api_key: impl Into<String>, config: &AppConfig) -> Self {
        let mut stripe = Self::new(api_key)
            .with_base_url(config.api.base_url.clone())
            .with_webhook_tolerance(config.webhook.tolerance_secs)
            .with_require_livemode(config.webhook.require_livemode);
        if let Some(version) = &config.api.version {
            stripe = stripe.with_api_version(version.clone());
        }
        stripe
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Pin the API version sent with every request.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Set the webhook timestamp tolerance in seconds.
    pub fn with_webhook_tolerance(mut self, secs: i64) -> Self {
        self.webhook_tolerance_secs = secs;
        self
    }

    /// Require livemode webhook events.
    pub fn with_require_livemode(mut self, require: bool) -> Self {
        self.require_livemode = require;
        self
    }

    /// Whether the key is a test mode key.
    pub fn is_test_mode(&self) -> bool {
        let key = self.api_key.expose_secret();
        key.starts_with("sk_test_") || key.starts_with("rk_test_")
    }

    /// Whether the key is a live mode key.
    pub fn is_live_mode(&self) -> bool {
        let key = self.api_key.expose_secret();
        key.starts_with("sk_live_") || key.starts_with("rk_live_")
    }

    /// Base URL requests are sent to.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

/// Stripe payment provider adapter.
///
/// Implements `PaymentProvider` for Stripe API integration.
pub struct StripePaymentAdapter {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripePaymentAdapter {
    /// Create a new Stripe adapter with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Build the customers endpoint, optionally addressing a single customer.
    ///
    /// The customer ID is percent-encoded as one path segment.
    fn customers_url(&self, customer_id: Option<&str>) -> Result<Url, PaymentError> {
        let mut url = Url::parse(&self.config.api_base_url).map_err(|e| {
            PaymentError::new(
                PaymentErrorCode::InvalidRequest,
                format!("Invalid API base URL: {}", e),
            )
        })?;

        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                PaymentError::new(
                    PaymentErrorCode::InvalidRequest,
                    format!("API base URL cannot hold a path: {}", self.config.api_base_url),
                )
            })?;
            segments.pop_if_empty().push("v1").push("customers");
            if let Some(id) = customer_id {
                segments.push(id);
            }
        }

        Ok(url)
    }

    /// Attach credentials and standard headers.
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .header(USER_AGENT, USER_AGENT_VALUE);

        match &self.config.api_version {
            Some(version) => builder.header("Stripe-Version", version),
            None => builder,
        }
    }

    /// Send a request and return the raw body of a successful response.
    async fn execute(
        &self,
        operation: &'static str,
        builder: RequestBuilder,
    ) -> Result<Vec<u8>, PaymentError> {
        let response = self.authorized(builder).send().await.map_err(|e| {
            tracing::error!(operation, error = %e, "Stripe request failed to send");
            PaymentError::network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        if !status.is_success() {
            let error = api_error(status, &body);
            tracing::warn!(
                operation,
                status = status.as_u16(),
                provider_code = error.provider_code.as_deref().unwrap_or(""),
                error = %error.message,
                "Stripe request rejected"
            );
            return Err(error);
        }

        tracing::debug!(operation, bytes = body.len(), "Stripe request succeeded");
        Ok(body.to_vec())
    }

    /// Verify webhook signature using HMAC-SHA256.
    ///
    /// # Security
    ///
    /// - Uses constant-time comparison to prevent timing attacks
    /// - Validates timestamp to prevent replay attacks
    fn verify_signature(
        &self,
        payload: &[u8],
        header: &SignatureHeader,
        secret: &SecretString,
    ) -> Result<(), PaymentError> {
        // 1. Validate timestamp (prevent replay attacks)
        let now = chrono::Utc::now().timestamp();
        let age = now.checked_sub(header.timestamp).ok_or_else(|| {
            tracing::warn!(event_timestamp = header.timestamp, "Webhook timestamp out of range");
            PaymentError::invalid_webhook("Timestamp out of range")
        })?;

        if age > self.config.webhook_tolerance_secs {
            tracing::warn!(
                event_timestamp = header.timestamp,
                current_time = now,
                age_secs = age,
                "Webhook event too old - possible replay attack"
            );
            return Err(PaymentError::invalid_webhook(format!(
                "Event too old ({} seconds)",
                age
            )));
        }

        if age < -MAX_FUTURE_TOLERANCE_SECS {
            tracing::warn!(
                event_timestamp = header.timestamp,
                current_time = now,
                "Webhook event from future - clock skew or manipulation"
            );
            return Err(PaymentError::invalid_webhook("Event timestamp in future"));
        }

        // 2. Compute expected signature over "{timestamp}.{payload}"
        let mut mac = HmacSha256::new_from_slice(secret.expose_secret().as_bytes())
            .map_err(|e| PaymentError::invalid_webhook(format!("Unusable secret: {}", e)))?;
        mac.update(header.timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);
        let expected = mac.finalize().into_bytes();

        // 3. Constant-time comparison against every v1 signature
        let expected_bytes: &[u8] = expected.as_slice();
        let matched = header
            .v1_signatures
            .iter()
            .any(|provided| bool::from(expected_bytes.ct_eq(provided.as_slice())));

        if !matched {
            tracing::warn!(
                candidates = header.v1_signatures.len(),
                "Invalid webhook signature"
            );
            return Err(PaymentError::invalid_webhook("Invalid signature"));
        }

        Ok(())
    }

    /// Parse a signed payload as a Stripe event.
    fn parse_event(&self, payload: &[u8]) -> Result<WebhookEvent, PaymentError> {
        let stripe_event: StripeWebhookEvent = serde_json::from_slice(payload).map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse webhook payload");
            PaymentError::invalid_webhook(format!("Invalid JSON: {}", e))
        })?;

        if self.config.require_livemode && !stripe_event.livemode {
            tracing::warn!(
                event_id = %stripe_event.id,
                "Rejected test mode event"
            );
            return Err(PaymentError::invalid_webhook(
                "Test mode events not allowed",
            ));
        }

        Ok(WebhookEvent {
            id: stripe_event.id,
            event_type: stripe_event.event_type,
            created: stripe_event.created,
            livemode: stripe_event.livemode,
        })
    }
}

/// Form fields for `POST /v1/customers`.
fn customer_form(request: &CreateCustomerRequest) -> Vec<(String, String)> {
    let mut params = vec![
        ("description".to_string(), request.description.clone()),
        ("email".to_string(), request.email.clone()),
    ];

    for (i, locale) in request.preferred_locales.iter().enumerate() {
        params.push((format!("preferred_locales[{}]", i), locale.clone()));
    }

    params
}

/// Convert a non-2xx response into a `PaymentError`.
///
/// The message is Stripe's own `error.message` when the body is a Stripe
/// error object, otherwise the body text.
fn api_error(status: StatusCode, body: &[u8]) -> PaymentError {
    let code = PaymentErrorCode::from_status(status.as_u16());

    let error = match serde_json::from_slice::<StripeErrorResponse>(body) {
        Ok(parsed) => {
            let message = parsed
                .error
                .message
                .unwrap_or_else(|| status.to_string());
            let error = PaymentError::new(code, message);
            match parsed.error.code {
                Some(provider_code) => error.with_provider_code(provider_code),
                None => error,
            }
        }
        Err(_) => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            if text.is_empty() {
                PaymentError::new(code, status.to_string())
            } else {
                PaymentError::new(code, text)
            }
        }
    };

    error.with_status(status.as_u16())
}

#[async_trait]
impl PaymentProvider for StripePaymentAdapter {
    async fn get_customer(&self, customer_id: &str) -> Result<Vec<u8>, PaymentError> {
        let url = self.customers_url(Some(customer_id))?;
        tracing::debug!(customer_id, "Fetching Stripe customer");

        self.execute("get_customer", self.http_client.get(url)).await
    }

    async fn create_customer(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<Vec<u8>, PaymentError> {
        let url = self.customers_url(None)?;
        let params = customer_form(&request);
        tracing::debug!(
            locales = ?request.preferred_locales,
            "Creating Stripe customer"
        );

        self.execute("create_customer", self.http_client.post(url).form(&params))
            .await
    }

    async fn verify_webhook(
        &self,
        payload: &[u8],
        signature: &str,
        secret: &SecretString,
    ) -> Result<WebhookEvent, PaymentError> {
        // 1. Parse signature header
        let header = SignatureHeader::parse(signature).map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse Stripe-Signature header");
            PaymentError::invalid_webhook(e.to_string())
        })?;

        // 2. Verify signature (includes timestamp validation)
        self.verify_signature(payload, &header, secret)?;

        // 3. Parse event
        let event = self.parse_event(payload)?;

        tracing::info!(
            event_id = %event.id,
            event_type = %event.event_type,
            "Webhook signature verified"
        );

        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test_secret";

    fn test_adapter() -> StripePaymentAdapter {
        StripePaymentAdapter::new(StripeConfig::new("sk_test_key"))
    }

    fn secret() -> SecretString {
        SecretString::new(SECRET.to_string())
    }

    fn create_test_signature(secret: &str, timestamp: i64, payload: &str) -> String {
        let signed_payload = format!("{}.{}", timestamp, payload);
        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(signed_payload.as_bytes());
        let result = mac.finalize().into_bytes();

        format!("t={},v1={}", timestamp, hex::encode(result))
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn config_new_sets_defaults() {
        let config = StripeConfig::new("api_key");
        assert_eq!(config.api_base_url, "https://api.stripe.com");
        assert!(config.api_version.is_none());
        assert_eq!(config.webhook_tolerance_secs, 300);
        assert!(!config.require_livemode);
    }

    #[test]
    fn config_from_app_config() {
        let mut app = AppConfig::default();
        app.api.base_url = "http://localhost:12111".to_string();
        app.api.version = Some("2024-06-20".to_string());
        app.webhook.tolerance_secs = 60;
        app.webhook.require_livemode = true;

        let config = StripeConfig::from_app_config("sk_live_abc", &app);

        assert_eq!(config.api_base_url, "http://localhost:12111");
        assert_eq!(config.api_version.as_deref(), Some("2024-06-20"));
        assert_eq!(config.webhook_tolerance_secs, 60);
        assert!(config.require_livemode);
    }

    #[test]
    fn config_key_mode_detection() {
        assert!(StripeConfig::new("sk_test_abc").is_test_mode());
        assert!(StripeConfig::new("rk_live_abc").is_live_mode());

        let unknown = StripeConfig::new("pk_test_abc");
        assert!(!unknown.is_test_mode());
        assert!(!unknown.is_live_mode());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Request Building Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn customers_url_default_base() {
        let adapter = test_adapter();
        let url = adapter.customers_url(None).unwrap();
        assert_eq!(url.as_str(), "https://api.stripe.com/v1/customers");
    }

    #[test]
    fn customers_url_encodes_id_as_single_segment() {
        let adapter = test_adapter();
        let url = adapter.customers_url(Some("cus 1/x")).unwrap();
        assert_eq!(url.as_str(), "https://api.stripe.com/v1/customers/cus%201%2Fx");
    }

    #[test]
    fn customers_url_keeps_base_path_prefix() {
        let adapter = StripePaymentAdapter::new(
            StripeConfig::new("sk_test_key").with_base_url("http://localhost:12111/stripe/"),
        );
        let url = adapter.customers_url(Some("cus_123")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:12111/stripe/v1/customers/cus_123");
    }

    #[test]
    fn customers_url_rejects_unparseable_base() {
        let adapter =
            StripePaymentAdapter::new(StripeConfig::new("sk_test_key").with_base_url("nope"));
        let err = adapter.customers_url(None).unwrap_err();
        assert_eq!(err.code, PaymentErrorCode::InvalidRequest);
    }

    #[test]
    fn customer_form_carries_locales_in_order() {
        let request = CreateCustomerRequest {
            description: "Frequent buyer".to_string(),
            email: "jenny@example.com".to_string(),
            preferred_locales: vec!["en".to_string(), "es".to_string()],
        };

        let form = customer_form(&request);

        assert_eq!(
            form,
            vec![
                ("description".to_string(), "Frequent buyer".to_string()),
                ("email".to_string(), "jenny@example.com".to_string()),
                ("preferred_locales[0]".to_string(), "en".to_string()),
                ("preferred_locales[1]".to_string(), "es".to_string()),
            ]
        );
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Error Mapping Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn api_error_uses_stripe_message() {
        let body = br#"{
            "error": {
                "type": "invalid_request_error",
                "code": "resource_missing",
                "message": "No such customer: 'cus_x'"
            }
        }"#;
        let err = api_error(StatusCode::NOT_FOUND, body);

        assert_eq!(err.code, PaymentErrorCode::NotFound);
        assert_eq!(err.message, "No such customer: 'cus_x'");
        assert_eq!(err.provider_code.as_deref(), Some("resource_missing"));
        assert_eq!(err.status, Some(404));
    }

    #[test]
    fn api_error_falls_back_to_body_text() {
        let err = api_error(StatusCode::BAD_GATEWAY, b"upstream exploded\n");
        assert_eq!(err.code, PaymentErrorCode::ProviderError);
        assert_eq!(err.message, "upstream exploded");
    }

    #[test]
    fn api_error_empty_body_uses_status() {
        let err = api_error(StatusCode::UNAUTHORIZED, b"");
        assert_eq!(err.code, PaymentErrorCode::AuthenticationError);
        assert_eq!(err.message, "401 Unauthorized");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Signature Verification Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn verify_signature_valid() {
        let adapter = test_adapter();
        let payload = r#"{"id":"evt_test"}"#;
        let timestamp = chrono::Utc::now().timestamp();
        let signature = create_test_signature(SECRET, timestamp, payload);

        let header = SignatureHeader::parse(&signature).unwrap();
        let result = adapter.verify_signature(payload.as_bytes(), &header, &secret());

        assert!(result.is_ok());
    }

    #[test]
    fn verify_signature_invalid() {
        let adapter = test_adapter();
        let payload = r#"{"id":"evt_test"}"#;
        let timestamp = chrono::Utc::now().timestamp();

        // Create signature with wrong secret
        let signature = create_test_signature("wrong_secret", timestamp, payload);

        let header = SignatureHeader::parse(&signature).unwrap();
        let result = adapter.verify_signature(payload.as_bytes(), &header, &secret());

        assert!(matches!(
            result.unwrap_err().code,
            PaymentErrorCode::InvalidWebhook
        ));
    }

    #[test]
    fn verify_signature_tampered_payload() {
        let adapter = test_adapter();
        let timestamp = chrono::Utc::now().timestamp();
        let signature = create_test_signature(SECRET, timestamp, r#"{"amount":100}"#);

        let header = SignatureHeader::parse(&signature).unwrap();
        let result = adapter.verify_signature(br#"{"amount":999}"#, &header, &secret());

        assert!(result.is_err());
    }

    #[test]
    fn verify_signature_accepts_any_matching_v1() {
        let adapter = test_adapter();
        let payload = r#"{"id":"evt_rotated"}"#;
        let timestamp = chrono::Utc::now().timestamp();
        let stale = create_test_signature("whsec_old_secret", timestamp, payload);
        let current = create_test_signature(SECRET, timestamp, payload);
        let current_v1 = current.split_once(",v1=").unwrap().1;

        let header = SignatureHeader::parse(&format!("{},v1={}", stale, current_v1)).unwrap();
        assert_eq!(header.v1_signatures.len(), 2);

        let result = adapter.verify_signature(payload.as_bytes(), &header, &secret());
        assert!(result.is_ok());
    }

    #[test]
    fn verify_signature_expired_timestamp() {
        let adapter = test_adapter();
        let payload = r#"{"id":"evt_test"}"#;
        let old_timestamp = chrono::Utc::now().timestamp() - 600; // 10 minutes ago

        let signature = create_test_signature(SECRET, old_timestamp, payload);

        let header = SignatureHeader::parse(&signature).unwrap();
        let result = adapter.verify_signature(payload.as_bytes(), &header, &secret());

        assert!(result.unwrap_err().message.contains("too old"));
    }

    #[test]
    fn verify_signature_respects_configured_tolerance() {
        let adapter = StripePaymentAdapter::new(
            StripeConfig::new("sk_test_key").with_webhook_tolerance(900),
        );
        let payload = r#"{"id":"evt_test"}"#;
        let timestamp = chrono::Utc::now().timestamp() - 600;
        let signature = create_test_signature(SECRET, timestamp, payload);

        let header = SignatureHeader::parse(&signature).unwrap();
        let result = adapter.verify_signature(payload.as_bytes(), &header, &secret());

        assert!(result.is_ok());
    }

    #[test]
    fn verify_signature_future_timestamp() {
        let adapter = test_adapter();
        let payload = r#"{"id":"evt_test"}"#;
        let future_timestamp = chrono::Utc::now().timestamp() + 120; // 2 minutes in future

        let signature = create_test_signature(SECRET, future_timestamp, payload);

        let header = SignatureHeader::parse(&signature).unwrap();
        let result = adapter.verify_signature(payload.as_bytes(), &header, &secret());

        assert!(result.unwrap_err().message.contains("future"));
    }

    #[test]
    fn verify_signature_small_future_tolerance() {
        let adapter = test_adapter();
        let payload = r#"{"id":"evt_test"}"#;
        // 30 seconds in future should be tolerated
        let timestamp = chrono::Utc::now().timestamp() + 30;

        let signature = create_test_signature(SECRET, timestamp, payload);

        let header = SignatureHeader::parse(&signature).unwrap();
        let result = adapter.verify_signature(payload.as_bytes(), &header, &secret());

        assert!(result.is_ok());
    }

    #[test]
    fn verify_signature_rejects_unrepresentable_age() {
        let adapter = test_adapter();
        let payload = r#"{"id":"evt_test"}"#;
        let header = SignatureHeader {
            timestamp: i64::MIN,
            v1_signatures: vec![vec![0x00]],
        };

        let result = adapter.verify_signature(payload.as_bytes(), &header, &secret());

        assert!(result.unwrap_err().message.contains("out of range"));
    }

    #[tokio::test]
    async fn verify_webhook_rejects_extreme_timestamps() {
        let adapter = test_adapter();
        let payload = r#"{"id":"evt_test","type":"ping"}"#;

        for timestamp in ["-9223372036854775808", "9223372036854775807", "-1"] {
            let signature = format!("t={},v1=00", timestamp);
            let result = adapter
                .verify_webhook(payload.as_bytes(), &signature, &secret())
                .await;

            assert_eq!(result.unwrap_err().code, PaymentErrorCode::InvalidWebhook);
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Event Parsing Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn parse_event_extracts_envelope() {
        let adapter = test_adapter();
        let payload = r#"{
            "id": "evt_test",
            "type": "customer.created",
            "created": 1704067200,
            "data": {"object": {"id": "cus_123", "object": "customer"}},
            "livemode": false,
            "pending_webhooks": 0
        }"#;

        let event = adapter.parse_event(payload.as_bytes()).unwrap();

        assert_eq!(event.id, "evt_test");
        assert_eq!(event.event_type, "customer.created");
        assert_eq!(event.created, 1704067200);
        assert!(!event.livemode);
    }

    #[test]
    fn parse_rejects_test_mode_when_livemode_required() {
        let adapter =
            StripePaymentAdapter::new(StripeConfig::new("sk_live_key").with_require_livemode(true));

        let payload = r#"{
            "id": "evt_test",
            "type": "customer.created",
            "created": 1704067200,
            "data": {"object": {}},
            "livemode": false
        }"#;

        let result = adapter.parse_event(payload.as_bytes());
        assert!(result.unwrap_err().message.contains("Test mode"));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Integration Tests (verify_webhook full flow)
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn verify_webhook_valid_signature_and_payload() {
        let adapter = test_adapter();

        let payload = r#"{
            "id": "evt_test123",
            "type": "customer.updated",
            "created": 1704067200,
            "data": {"object": {"id": "cus_test", "object": "customer"}},
            "livemode": false,
            "pending_webhooks": 0
        }"#;

        let timestamp = chrono::Utc::now().timestamp();
        let signature = create_test_signature(SECRET, timestamp, payload);

        let event = adapter
            .verify_webhook(payload.as_bytes(), &signature, &secret())
            .await
            .unwrap();

        assert_eq!(event.id, "evt_test123");
        assert_eq!(event.event_type, "customer.updated");
    }

    #[tokio::test]
    async fn verify_webhook_rejects_invalid_signature() {
        let adapter = test_adapter();
        let payload = r#"{"id":"evt_test"}"#;
        let signature = "t=1704067200,v1=deadbeef";

        let result = adapter
            .verify_webhook(payload.as_bytes(), signature, &secret())
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn verify_webhook_rejects_malformed_header() {
        let adapter = test_adapter();
        let payload = r#"{"id":"evt_test"}"#;

        let result = adapter
            .verify_webhook(payload.as_bytes(), "malformed_header", &secret())
            .await;

        assert_eq!(result.unwrap_err().code, PaymentErrorCode::InvalidWebhook);
    }

    #[tokio::test]
    async fn verify_webhook_rejects_invalid_json() {
        let adapter = test_adapter();
        let payload = "not valid json";
        let timestamp = chrono::Utc::now().timestamp();
        let signature = create_test_signature(SECRET, timestamp, payload);

        let result = adapter
            .verify_webhook(payload.as_bytes(), &signature, &secret())
            .await;

        assert!(result.unwrap_err().message.contains("Invalid JSON"));
    }
}
