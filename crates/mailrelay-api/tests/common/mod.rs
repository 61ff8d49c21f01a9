//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

pub mod mock_ses;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use mailrelay_api::{ApiContext, router};
use mock_ses::MockSes;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const SENT_FROM: &str = "noreply@example.com";

/// Build the full router around a mock sender
pub fn test_app(sender: MockSes) -> Router {
    router(ApiContext::with_sender(Arc::new(sender), SENT_FROM))
}

/// Issue one request and decode the JSON response body
pub async fn request(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// POST a body to the send endpoint
pub async fn post_send(app: Router, body: &str) -> (StatusCode, Value) {
    request(app, Method::POST, "/v1/send", body).await
}
