//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as
//! production) over a fresh in-memory store, and provides request helpers
//! that send requests via `tower::ServiceExt::oneshot` without a TCP
//! listener.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use taskhub_api::auth::jwt::{generate_access_token, JwtConfig};
use taskhub_api::config::ServerConfig;
use taskhub_api::router::build_app_router;
use taskhub_api::state::AppState;
use taskhub_core::types::DocId;
use taskhub_db::models::{CreateUser, User};
use taskhub_db::repositories::UserRepo;
use taskhub_db::Store;

/// Signing secret shared by the test config and [`token_for`].
pub const TEST_JWT_SECRET: &str = "test-secret";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router over the given store.
///
/// This goes through [`build_app_router`], so tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses. Routers are cheap; build one per request and
/// share the store via `Arc`.
pub fn build_test_app(store: Arc<Store>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Insert a user directly through the repository and return it.
pub async fn seed_user(store: &Store, name: &str, email: &str) -> User {
    UserRepo::create(
        store,
        CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            avatar: None,
        },
    )
    .await
    .expect("seed user")
}

/// Mint a Bearer token for the given principal.
pub fn token_for(user_id: DocId) -> String {
    generate_access_token(user_id, &test_config().jwt).expect("sign token")
}

async fn send(
    app: Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, path: &str, token: &str) -> Response {
    send(app, Method::GET, path, Some(token), None).await
}

pub async fn get_anon(app: Router, path: &str) -> Response {
    send(app, Method::GET, path, None, None).await
}

pub async fn post_json(app: Router, path: &str, token: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, path, Some(token), Some(body)).await
}

pub async fn put_json(app: Router, path: &str, token: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, path, Some(token), Some(body)).await
}

pub async fn delete(app: Router, path: &str, token: &str) -> Response {
    send(app, Method::DELETE, path, Some(token), None).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
