//! Comment model.

use serde::{Deserialize, Serialize};

use taskhub_core::types::{DocId, Timestamp};

/// A comment document attached to a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: DocId,
    pub content: String,
    /// Must reference an existing task at creation time.
    pub task: DocId,
    /// The creating principal; the only one allowed to mutate this comment.
    pub author: DocId,
    pub is_edited: bool,
    /// Stamped on every edit.
    pub edited_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a comment. The author is the acting principal.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    pub task: DocId,
    pub content: String,
}

/// DTO for editing a comment.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComment {
    pub content: String,
}
