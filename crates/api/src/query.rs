//! Shared request parameter types: list-endpoint query filters and the
//! `{id}` path segment.
//!
//! Raw query strings become typed filters here: only keys that are present
//! and non-empty contribute an exact-match clause; everything else leaves
//! the scan unconstrained. Id-valued keys must parse as ids.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::Deserialize;
use uuid::Uuid;

use taskhub_core::types::DocId;
use taskhub_db::models::{ProjectFilter, TaskFilter};

use crate::error::{AppError, AppResult};

/// Extractor for `{id}` path segments.
///
/// Axum's default `Path` rejection is a plain-text 400; this wrapper maps
/// a malformed id onto the service's standard error envelope instead.
pub struct IdPath(pub DocId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest("Invalid id in path".to_string()))?;
        let id = Uuid::parse_str(&raw)
            .map_err(|_| AppError::BadRequest("Invalid id in path".to_string()))?;
        Ok(Self(id))
    }
}

/// Drop absent and empty values.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse an id-valued query parameter.
fn parse_id(field: &str, raw: &str) -> AppResult<DocId> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid id in '{field}'")))
}

/// Query parameters for `GET /api/tasks`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListQuery {
    pub project: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assigned_to: Option<String>,
}

impl TaskListQuery {
    pub fn into_filter(self) -> AppResult<TaskFilter> {
        let project = match non_empty(self.project) {
            Some(raw) => Some(parse_id("project", &raw)?),
            None => None,
        };
        let assigned_to = match non_empty(self.assigned_to) {
            Some(raw) => Some(parse_id("assignedTo", &raw)?),
            None => None,
        };

        Ok(TaskFilter {
            project,
            status: non_empty(self.status),
            priority: non_empty(self.priority),
            assigned_to,
        })
    }
}

/// Query parameters for `GET /api/projects`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
}

impl ProjectListQuery {
    pub fn into_filter(self) -> ProjectFilter {
        ProjectFilter {
            status: non_empty(self.status),
            priority: non_empty(self.priority),
        }
    }
}

/// Query parameters for `GET /api/comments`. The `task` key is required.
#[derive(Debug, Default, Deserialize)]
pub struct CommentListQuery {
    pub task: Option<String>,
}

impl CommentListQuery {
    pub fn task_id(self) -> AppResult<DocId> {
        let raw = non_empty(self.task)
            .ok_or_else(|| AppError::BadRequest("Task ID is required".to_string()))?;
        parse_id("task", &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn empty_values_impose_no_constraint() {
        let filter = TaskListQuery {
            project: Some(String::new()),
            status: Some(String::new()),
            priority: None,
            assigned_to: None,
        }
        .into_filter()
        .unwrap();
        assert!(filter.project.is_none());
        assert!(filter.status.is_none());
    }

    #[test]
    fn malformed_id_is_a_bad_request() {
        let result = TaskListQuery {
            project: Some("not-an-id".to_string()),
            ..Default::default()
        }
        .into_filter();
        assert_matches!(result, Err(AppError::BadRequest(_)));
    }

    #[test]
    fn missing_task_key_is_a_bad_request() {
        assert_matches!(
            CommentListQuery { task: None }.task_id(),
            Err(AppError::BadRequest(_))
        );
        assert_matches!(
            CommentListQuery {
                task: Some(String::new())
            }
            .task_id(),
            Err(AppError::BadRequest(_))
        );
    }
}
