//! HTTP-level integration tests for task endpoints: CRUD, filtering,
//! the completion lifecycle hook, and the statistics summary.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json, token_for};
use serde_json::json;

use taskhub_db::Store;

/// Seed a user and a project over HTTP, returning (token, project_id).
async fn setup(store: &Arc<Store>) -> (String, String) {
    let user = common::seed_user(store, "Alice", "alice@example.com").await;
    let token = token_for(user.id);

    let response = post_json(
        common::build_test_app(store.clone()),
        "/api/projects",
        &token,
        json!({"name": "Launch"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let project = body_json(response).await;
    let project_id = project["data"]["id"].as_str().unwrap().to_string();

    (token, project_id)
}

#[tokio::test]
async fn create_task_applies_defaults() {
    let store = Arc::new(Store::new());
    let (token, project_id) = setup(&store).await;

    let response = post_json(
        common::build_test_app(store.clone()),
        "/api/tasks",
        &token,
        json!({"title": "Design spec", "project": project_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Task created successfully");
    assert_eq!(json["data"]["status"], "todo");
    assert_eq!(json["data"]["priority"], "medium");
    assert!(json["data"]["completedAt"].is_null());
    // References come back expanded.
    assert_eq!(json["data"]["project"]["name"], "Launch");
    assert_eq!(json["data"]["createdBy"]["name"], "Alice");
}

#[tokio::test]
async fn create_task_with_missing_project_is_404_and_persists_nothing() {
    let store = Arc::new(Store::new());
    let (token, _) = setup(&store).await;

    let response = post_json(
        common::build_test_app(store.clone()),
        "/api/tasks",
        &token,
        json!({"title": "Orphan", "project": uuid::Uuid::now_v7().to_string()}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Project not found");

    // Store count unchanged.
    let response = get(common::build_test_app(store.clone()), "/api/tasks", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn create_task_with_short_title_is_400() {
    let store = Arc::new(Store::new());
    let (token, project_id) = setup(&store).await;

    let response = post_json(
        common::build_test_app(store.clone()),
        "/api/tasks",
        &token,
        json!({"title": "ab", "project": project_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn create_task_with_invalid_status_is_400() {
    let store = Arc::new(Store::new());
    let (token, project_id) = setup(&store).await;

    let response = post_json(
        common::build_test_app(store.clone()),
        "/api/tasks",
        &token,
        json!({"title": "Valid title", "project": project_id, "status": "started"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_id_in_path_uses_the_error_envelope() {
    let store = Arc::new(Store::new());
    let (token, _) = setup(&store).await;

    let response = get(
        common::build_test_app(store.clone()),
        "/api/tasks/not-an-id",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Same JSON envelope as every other error path, not a plain-text body.
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid id in path");

    let response = put_json(
        common::build_test_app(store.clone()),
        "/api/projects/not-an-id",
        &token,
        json!({"name": "Renamed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["success"], false);
}

#[tokio::test]
async fn get_nonexistent_task_is_404() {
    let store = Arc::new(Store::new());
    let (token, _) = setup(&store).await;

    let path = format!("/api/tasks/{}", uuid::Uuid::now_v7());
    let response = get(common::build_test_app(store.clone()), &path, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn completion_stamp_survives_later_status_changes() {
    let store = Arc::new(Store::new());
    let (token, project_id) = setup(&store).await;

    let response = post_json(
        common::build_test_app(store.clone()),
        "/api/tasks",
        &token,
        json!({"title": "Design spec", "project": project_id}),
    )
    .await;
    let task_id = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();
    let path = format!("/api/tasks/{task_id}");

    // First transition to done stamps completedAt.
    let response = put_json(
        common::build_test_app(store.clone()),
        &path,
        &token,
        json!({"status": "done"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let done = body_json(response).await;
    let stamp = done["data"]["completedAt"]
        .as_str()
        .expect("completedAt must be set")
        .to_string();

    // Moving to blocked leaves the stamp untouched.
    let response = put_json(
        common::build_test_app(store.clone()),
        &path,
        &token,
        json!({"status": "blocked"}),
    )
    .await;
    let blocked = body_json(response).await;
    assert_eq!(blocked["data"]["status"], "blocked");
    assert_eq!(blocked["data"]["completedAt"], stamp.as_str());

    // A second transition to done does not re-stamp.
    let response = put_json(
        common::build_test_app(store.clone()),
        &path,
        &token,
        json!({"status": "done"}),
    )
    .await;
    let done_again = body_json(response).await;
    assert_eq!(done_again["data"]["completedAt"], stamp.as_str());
}

#[tokio::test]
async fn list_filters_by_status_newest_first() {
    let store = Arc::new(Store::new());
    let (token, project_id) = setup(&store).await;

    for title in ["First", "Second", "Third"] {
        let response = post_json(
            common::build_test_app(store.clone()),
            "/api/tasks",
            &token,
            json!({"title": title, "project": project_id}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    // Mark the first two done.
    let response = get(common::build_test_app(store.clone()), "/api/tasks", &token).await;
    let all = body_json(response).await;
    assert_eq!(all["count"], 3);
    // Newest first: Third, Second, First.
    assert_eq!(all["data"][0]["title"], "Third");
    assert_eq!(all["data"][2]["title"], "First");

    for task in &["First", "Second"] {
        let id = all["data"]
            .as_array()
            .unwrap()
            .iter()
            .find(|t| t["title"] == **task)
            .unwrap()["id"]
            .as_str()
            .unwrap()
            .to_string();
        put_json(
            common::build_test_app(store.clone()),
            &format!("/api/tasks/{id}"),
            &token,
            json!({"status": "done"}),
        )
        .await;
    }

    let response = get(
        common::build_test_app(store.clone()),
        "/api/tasks?status=done",
        &token,
    )
    .await;
    let done = body_json(response).await;
    assert_eq!(done["count"], 2);
    // Exactly the done subset, still newest-created-first.
    assert_eq!(done["data"][0]["title"], "Second");
    assert_eq!(done["data"][1]["title"], "First");
}

#[tokio::test]
async fn empty_filter_values_impose_no_constraint() {
    let store = Arc::new(Store::new());
    let (token, project_id) = setup(&store).await;

    post_json(
        common::build_test_app(store.clone()),
        "/api/tasks",
        &token,
        json!({"title": "Only task", "project": project_id}),
    )
    .await;

    let response = get(
        common::build_test_app(store.clone()),
        "/api/tasks?status=&project=",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
}

#[tokio::test]
async fn delete_task_then_get_is_404() {
    let store = Arc::new(Store::new());
    let (token, project_id) = setup(&store).await;

    let response = post_json(
        common::build_test_app(store.clone()),
        "/api/tasks",
        &token,
        json!({"title": "Short lived", "project": project_id}),
    )
    .await;
    let task_id = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();
    let path = format!("/api/tasks/{task_id}");

    let response = delete(common::build_test_app(store.clone()), &path, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Task deleted successfully");

    let response = get(common::build_test_app(store.clone()), &path, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_total_equals_sum_of_status_counts() {
    let store = Arc::new(Store::new());
    let (token, project_id) = setup(&store).await;

    for (title, status) in [
        ("Task one", "todo"),
        ("Task two", "in-progress"),
        ("Task three", "todo"),
        ("Task four", "done"),
    ] {
        let response = post_json(
            common::build_test_app(store.clone()),
            "/api/tasks",
            &token,
            json!({"title": title, "project": project_id, "status": status, "priority": "high"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(
        common::build_test_app(store.clone()),
        "/api/tasks/stats/summary",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["total"], 4);

    let by_status = json["data"]["byStatus"].as_array().unwrap();
    let sum: u64 = by_status.iter().map(|g| g["count"].as_u64().unwrap()).sum();
    assert_eq!(sum, 4);
    // Unobserved statuses are omitted (no zero-fill).
    assert!(!by_status.iter().any(|g| g["status"] == "review"));

    let by_priority = json["data"]["byPriority"].as_array().unwrap();
    assert_eq!(by_priority.len(), 1);
    assert_eq!(by_priority[0]["priority"], "high");
    assert_eq!(by_priority[0]["count"], 4);
}
