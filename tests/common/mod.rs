//! Stub Stripe API shared by the integration tests.
//!
//! Serves on an ephemeral port from its own thread and runtime, so both
//! blocking CLI tests and async adapter tests can use it.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::extract::{Form, Path};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;

/// Body returned for `cus_123`, pretty-printed on purpose.
pub const CUSTOMER_BODY: &str = r#"{
  "id": "cus_123",
  "object": "customer",
  "email": "jenny.rosen@example.com",
  "balance": 0
}"#;

/// `CUSTOMER_BODY` as it appears inside the one-line success envelope.
pub const CUSTOMER_LINE: &str =
    r#"{"id":"cus_123","object":"customer","email":"jenny.rosen@example.com","balance":0}"#;

pub const KNOWN_CUSTOMER: &str = "cus_123";

pub struct StubStripe {
    addr: SocketAddr,
}

impl StubStripe {
    /// Start a stub server. It lives until the test process exits.
    pub fn start() -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        listener
            .set_nonblocking(true)
            .expect("set listener non-blocking");
        let addr = listener.local_addr().expect("stub address");

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("stub runtime");
            runtime.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("tokio listener");
                axum::serve(listener, router()).await.expect("stub server");
            });
        });

        Self { addr }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

fn router() -> Router {
    Router::new()
        .route("/v1/customers", get(list_customers).post(create_customer))
        .route("/v1/customers/:id", get(retrieve_customer))
}

fn json_response(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

fn stripe_error(
    status: StatusCode,
    error_type: &str,
    code: Option<&str>,
    message: &str,
) -> Response {
    let body = json!({
        "error": {
            "type": error_type,
            "code": code,
            "message": message,
        }
    });
    json_response(status, body.to_string())
}

/// Stripe rejects requests without credentials with a 401.
fn unauthorized(headers: &HeaderMap) -> Option<Response> {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("Basic "))
        .unwrap_or(false);

    if authorized {
        None
    } else {
        Some(stripe_error(
            StatusCode::UNAUTHORIZED,
            "invalid_request_error",
            None,
            "You did not provide an API key.",
        ))
    }
}

async fn retrieve_customer(headers: HeaderMap, Path(id): Path<String>) -> Response {
    if let Some(response) = unauthorized(&headers) {
        return response;
    }

    if id == KNOWN_CUSTOMER {
        json_response(StatusCode::OK, CUSTOMER_BODY.to_string())
    } else {
        stripe_error(
            StatusCode::NOT_FOUND,
            "invalid_request_error",
            Some("resource_missing"),
            &format!("No such customer: '{}'", id),
        )
    }
}

async fn list_customers() -> Response {
    json_response(
        StatusCode::OK,
        json!({ "object": "list", "data": [] }).to_string(),
    )
}

/// Echo the submitted form so tests can check what was sent.
async fn create_customer(
    headers: HeaderMap,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    if let Some(response) = unauthorized(&headers) {
        return response;
    }

    let body = json!({
        "id": "cus_stub",
        "object": "customer",
        "form": fields,
    });
    json_response(StatusCode::OK, body.to_string())
}
