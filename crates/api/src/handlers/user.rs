//! Handlers for user endpoints.
//!
//! Users are created and updated here; they are never deleted by this
//! service. Password and token issuance belong to the external auth
//! collaborator.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use taskhub_db::models::{CreateUser, UpdateUser};
use taskhub_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::IdPath;
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.store).await;
    Ok(Json(ListResponse::new(users)))
}

/// GET /api/users/{id}
pub async fn get_user(
    _auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::get(&state.store, id).await?;
    Ok(Json(DataResponse::new(user)))
}

/// POST /api/users
pub async fn create_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::create(&state.store, input).await?;

    tracing::info!(user_id = %auth.user_id, created_id = %user.id, "User created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully", user)),
    ))
}

/// PUT /api/users/{id}
pub async fn update_user(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    Json(input): Json<UpdateUser>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::update(&state.store, id, input).await?;

    tracing::info!(user_id = %auth.user_id, updated_id = %id, "User updated");

    Ok(Json(MessageResponse::new("User updated successfully", user)))
}
