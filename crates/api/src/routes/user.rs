//! Route definitions for users. Mounted at `/users` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// User routes.
///
/// ```text
/// GET    /       -> list_users
/// POST   /       -> create_user
/// GET    /{id}   -> get_user
/// PUT    /{id}   -> update_user
/// ```
///
/// There is no delete route: users are never deleted by this service.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list_users).post(user::create_user))
        .route("/{id}", get(user::get_user).put(user::update_user))
}
