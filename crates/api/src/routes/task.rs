//! Route definitions for tasks. Mounted at `/tasks` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Task routes.
///
/// ```text
/// GET    /                -> list_tasks (?project, status, priority, assignedTo)
/// POST   /                -> create_task
/// GET    /stats/summary   -> task_stats
/// GET    /{id}            -> get_task
/// PUT    /{id}            -> update_task
/// DELETE /{id}            -> delete_task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list_tasks).post(task::create_task))
        .route("/stats/summary", get(task::task_stats))
        .route(
            "/{id}",
            get(task::get_task)
                .put(task::update_task)
                .delete(task::delete_task),
        )
}
