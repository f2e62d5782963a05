pub mod comment;
pub mod health;
pub mod project;
pub mod task;
pub mod user;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                       API index (public)
///
/// /users                  list, create
/// /users/{id}             get, update
///
/// /projects               list (?status, priority), create
/// /projects/{id}          get, update, delete
///
/// /tasks                  list (?project, status, priority, assignedTo), create
/// /tasks/stats/summary    statistics summary
/// /tasks/{id}             get, update, delete
///
/// /comments               list (?task, required), create
/// /comments/{id}          update, delete (author only)
/// ```
///
/// Everything except the index requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(api_index))
        .nest("/users", user::router())
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
        .nest("/comments", comment::router())
}

/// API index payload: service name, version, and endpoint map.
#[derive(Serialize)]
struct IndexResponse {
    message: &'static str,
    version: &'static str,
    endpoints: IndexEndpoints,
}

#[derive(Serialize)]
struct IndexEndpoints {
    users: &'static str,
    projects: &'static str,
    tasks: &'static str,
    comments: &'static str,
}

/// GET /api -- service discovery index (no auth required).
async fn api_index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Task Management API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: IndexEndpoints {
            users: "/api/users",
            projects: "/api/projects",
            tasks: "/api/tasks",
            comments: "/api/comments",
        },
    })
}
