//! Route definitions for projects. Mounted at `/projects` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Project routes.
///
/// ```text
/// GET    /       -> list_projects (?status, priority)
/// POST   /       -> create_project
/// GET    /{id}   -> get_project
/// PUT    /{id}   -> update_project
/// DELETE /{id}   -> delete_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(project::list_projects).post(project::create_project),
        )
        .route(
            "/{id}",
            get(project::get_project)
                .put(project::update_project)
                .delete(project::delete_project),
        )
}
