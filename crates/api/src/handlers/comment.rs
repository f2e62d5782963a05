//! Handlers for comment endpoints.
//!
//! Update and delete enforce the authorship guard: a principal that is not
//! the comment's author receives 403 and the record is untouched.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use taskhub_db::models::{CreateComment, UpdateComment};
use taskhub_db::repositories::CommentRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::{CommentListQuery, IdPath};
use crate::response::{ListResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/comments?task=
///
/// List a task's comment thread, oldest first. The `task` key is required.
pub async fn list_comments(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<CommentListQuery>,
) -> AppResult<impl IntoResponse> {
    let task = params.task_id()?;
    let comments = CommentRepo::list_for_task(&state.store, task).await;
    Ok(Json(ListResponse::new(comments)))
}

/// POST /api/comments
///
/// Create a comment authored by the acting principal.
pub async fn create_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    let comment = CommentRepo::create(&state.store, auth.user_id, input).await?;

    tracing::info!(user_id = %auth.user_id, comment_id = %comment.id, "Comment added");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Comment added successfully", comment)),
    ))
}

/// PUT /api/comments/{id}
///
/// Edit a comment (author only).
pub async fn update_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    Json(input): Json<UpdateComment>,
) -> AppResult<impl IntoResponse> {
    let comment = CommentRepo::update(&state.store, id, auth.user_id, input.content).await?;

    tracing::info!(user_id = %auth.user_id, comment_id = %id, "Comment updated");

    Ok(Json(MessageResponse::new(
        "Comment updated successfully",
        comment,
    )))
}

/// DELETE /api/comments/{id}
///
/// Delete a comment (author only).
pub async fn delete_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    CommentRepo::delete(&state.store, id, auth.user_id).await?;

    tracing::info!(user_id = %auth.user_id, comment_id = %id, "Comment deleted");

    Ok(Json(MessageResponse::new(
        "Comment deleted successfully",
        serde_json::json!({}),
    )))
}
