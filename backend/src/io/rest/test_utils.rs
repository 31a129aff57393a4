//! Helpers for driving the API router in tests.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

use crate::config::AppConfig;
use crate::{initialize_backend, AppState};

/// Router over a freshly seeded backend. Clones share the same state.
pub fn setup_test_app() -> Router {
    let app_state: AppState = initialize_backend(&AppConfig::default()).unwrap();
    super::router().with_state(app_state)
}

/// Send a request and decode the JSON response body
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send_raw(app, method, uri, body.map(|b| b.to_string())).await
}

/// Send a raw JSON string. A non-JSON response body comes back as a string value.
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}

pub async fn login_demo(app: &Router) {
    let (status, _) = send(
        app,
        Method::POST,
        "/auth/login",
        Some(serde_json::json!({ "email": "demo@family.com", "password": "demo123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
