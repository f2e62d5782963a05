//! Handlers for project endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use taskhub_db::models::{CreateProject, UpdateProject};
use taskhub_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::{IdPath, ProjectListQuery};
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/projects?status=&priority=
///
/// List projects matching the filter, newest first.
pub async fn list_projects(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ProjectListQuery>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter();
    let projects = ProjectRepo::list(&state.store, &filter).await;
    Ok(Json(ListResponse::new(projects)))
}

/// GET /api/projects/{id}
///
/// Fetch one project with its derived task list.
pub async fn get_project(
    _auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::get_detail(&state.store, id).await?;
    Ok(Json(DataResponse::new(project)))
}

/// POST /api/projects
///
/// Create a project owned by the acting principal.
pub async fn create_project(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::create(&state.store, auth.user_id, input).await?;

    tracing::info!(user_id = %auth.user_id, project_id = %project.id, "Project created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Project created successfully", project)),
    ))
}

/// PUT /api/projects/{id}
pub async fn update_project(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    Json(input): Json<UpdateProject>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::update(&state.store, id, input).await?;

    tracing::info!(user_id = %auth.user_id, project_id = %id, "Project updated");

    Ok(Json(MessageResponse::new(
        "Project updated successfully",
        project,
    )))
}

/// DELETE /api/projects/{id}
///
/// Deleting a project orphans its tasks; there is no cascade.
pub async fn delete_project(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    ProjectRepo::delete(&state.store, id).await?;

    tracing::info!(user_id = %auth.user_id, project_id = %id, "Project deleted");

    Ok(Json(MessageResponse::new(
        "Project deleted successfully",
        serde_json::json!({}),
    )))
}
