//! Handlers for task endpoints: CRUD, filtered listing, and the global
//! statistics summary.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use taskhub_db::models::{CreateTask, UpdateTask};
use taskhub_db::repositories::TaskRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::{IdPath, TaskListQuery};
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/tasks?project=&status=&priority=&assignedTo=
///
/// List tasks matching the filter, newest first.
pub async fn list_tasks(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<TaskListQuery>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter()?;
    let tasks = TaskRepo::list(&state.store, &filter).await;
    Ok(Json(ListResponse::new(tasks)))
}

/// GET /api/tasks/{id}
///
/// Fetch one task with its comment thread.
pub async fn get_task(
    _auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let task = TaskRepo::get_detail(&state.store, id).await?;
    Ok(Json(DataResponse::new(task)))
}

/// POST /api/tasks
///
/// Create a task; `createdBy` is the acting principal.
pub async fn create_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<impl IntoResponse> {
    let task = TaskRepo::create(&state.store, auth.user_id, input).await?;

    tracing::info!(user_id = %auth.user_id, task_id = %task.id, "Task created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Task created successfully", task)),
    ))
}

/// PUT /api/tasks/{id}
///
/// Partially update a task. A first transition to "done" stamps
/// `completedAt`.
pub async fn update_task(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    Json(input): Json<UpdateTask>,
) -> AppResult<impl IntoResponse> {
    let task = TaskRepo::update(&state.store, id, input).await?;

    tracing::info!(user_id = %auth.user_id, task_id = %id, "Task updated");

    Ok(Json(MessageResponse::new("Task updated successfully", task)))
}

/// DELETE /api/tasks/{id}
pub async fn delete_task(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    TaskRepo::delete(&state.store, id).await?;

    tracing::info!(user_id = %auth.user_id, task_id = %id, "Task deleted");

    Ok(Json(MessageResponse::new(
        "Task deleted successfully",
        serde_json::json!({}),
    )))
}

/// GET /api/tasks/stats/summary
///
/// Global task statistics grouped by status and by priority.
pub async fn task_stats(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let stats = TaskRepo::stats(&state.store).await;
    Ok(Json(DataResponse::new(stats)))
}
