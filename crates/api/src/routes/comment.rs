//! Route definitions for comments. Mounted at `/comments` by `api_routes()`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::comment;
use crate::state::AppState;

/// Comment routes.
///
/// ```text
/// GET    /       -> list_comments (?task, required)
/// POST   /       -> create_comment
/// PUT    /{id}   -> update_comment (author only)
/// DELETE /{id}   -> delete_comment (author only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(comment::list_comments).post(comment::create_comment),
        )
        .route(
            "/{id}",
            put(comment::update_comment).delete(comment::delete_comment),
        )
}
