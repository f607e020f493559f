//! Common test utilities
//!
//! Builds the application router against the in-memory credential store
//! so the full HTTP surface can be exercised without PostgreSQL, and
//! provides small request/response helpers around `tower::oneshot`.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use chatrelay::auth::{MemoryUserStore, TokenService};
use chatrelay::completions::CompletionClient;
use chatrelay::routes::create_router;
use chatrelay::server::AppState;
use serde_json::Value;
use tower::ServiceExt;

/// Signing secret used by every test app
pub const TEST_SECRET: &str = "test-secret";

/// Build a test app with no completion credential
pub fn test_app() -> Router {
    app_with_completions(CompletionClient::new(None))
}

/// Build a test app around a specific completion client
pub fn app_with_completions(completions: CompletionClient) -> Router {
    let state = AppState::new(
        Arc::new(MemoryUserStore::new()),
        TokenService::new(TEST_SECRET),
        completions,
    );
    create_router(state, None)
}

/// Send a JSON request, optionally with a `Cookie` header
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// Deserialize a response body as JSON
pub async fn response_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Extract the `token=<value>` pair from the Set-Cookie header, if any
pub fn session_cookie_pair(response: &Response<Body>) -> Option<String> {
    let raw = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    let pair = raw.split(';').next()?.trim();
    pair.starts_with("token=").then(|| pair.to_string())
}

/// Register a user and return the response
pub async fn register(
    app: &Router,
    username: &str,
    email: &str,
    password: &str,
) -> Response<Body> {
    send_json(
        app,
        "POST",
        "/register",
        Some(serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
            "confirmPassword": password,
        })),
        None,
    )
    .await
}

/// Log a user in and return the response
pub async fn login(app: &Router, username: &str, password: &str) -> Response<Body> {
    send_json(
        app,
        "POST",
        "/login",
        Some(serde_json::json!({ "username": username, "password": password })),
        None,
    )
    .await
}
