//! HTTP-level integration tests for user endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json, token_for};
use serde_json::json;

use taskhub_db::Store;

#[tokio::test]
async fn create_user_normalizes_email_to_lowercase() {
    let store = Arc::new(Store::new());
    let caller = common::seed_user(&store, "Admin", "admin@example.com").await;
    let token = token_for(caller.id);

    let response = post_json(
        common::build_test_app(store.clone()),
        "/api/users",
        &token,
        json!({"name": "Bob", "email": "Bob@Example.COM"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "User created successfully");
    assert_eq!(json["data"]["email"], "bob@example.com");
    assert!(json["data"]["avatar"].is_null());
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let store = Arc::new(Store::new());
    let caller = common::seed_user(&store, "Admin", "admin@example.com").await;
    let token = token_for(caller.id);

    let response = post_json(
        common::build_test_app(store.clone()),
        "/api/users",
        &token,
        json!({"name": "Clone", "email": "ADMIN@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn list_and_get_users() {
    let store = Arc::new(Store::new());
    let alice = common::seed_user(&store, "Alice", "alice@example.com").await;
    common::seed_user(&store, "Bob", "bob@example.com").await;
    let token = token_for(alice.id);

    let response = get(common::build_test_app(store.clone()), "/api/users", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    // Newest first.
    assert_eq!(json["data"][0]["name"], "Bob");

    let response = get(
        common::build_test_app(store.clone()),
        &format!("/api/users/{}", alice.id),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["email"], "alice@example.com");
}

#[tokio::test]
async fn get_unknown_user_is_404() {
    let store = Arc::new(Store::new());
    let alice = common::seed_user(&store, "Alice", "alice@example.com").await;
    let token = token_for(alice.id);

    let response = get(
        common::build_test_app(store.clone()),
        &format!("/api/users/{}", uuid::Uuid::now_v7()),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "User not found");
}

#[tokio::test]
async fn update_user_keeps_own_email_and_rejects_taken_one() {
    let store = Arc::new(Store::new());
    let alice = common::seed_user(&store, "Alice", "alice@example.com").await;
    common::seed_user(&store, "Bob", "bob@example.com").await;
    let token = token_for(alice.id);
    let path = format!("/api/users/{}", alice.id);

    // Re-submitting her own email alongside a rename is fine.
    let response = put_json(
        common::build_test_app(store.clone()),
        &path,
        &token,
        json!({"name": "Alice B.", "email": "alice@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "User updated successfully");
    assert_eq!(json["data"]["name"], "Alice B.");

    // Taking Bob's email is not.
    let response = put_json(
        common::build_test_app(store.clone()),
        &path,
        &token,
        json!({"email": "bob@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
