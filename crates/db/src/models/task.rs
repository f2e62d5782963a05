//! Task model, attachment sub-document, and list filter.

use serde::{Deserialize, Serialize};

use taskhub_core::types::{DocId, Timestamp};

/// A file reference attached to a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    pub url: String,
    pub uploaded_at: Timestamp,
}

/// A task document.
///
/// The comment relationship is derived by reverse lookup at read time.
/// `completed_at` is a derived field: stamped by the completion hook the
/// first time an update moves the status to "done", and never cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DocId,
    pub title: String,
    pub description: Option<String>,
    /// Must reference an existing project at creation time.
    pub project: DocId,
    pub assigned_to: Option<DocId>,
    /// The creating principal. Never client-supplied.
    pub created_by: DocId,
    pub status: String,
    pub priority: String,
    pub due_date: Option<Timestamp>,
    pub estimated_hours: Option<f64>,
    pub actual_hours: Option<f64>,
    pub tags: Vec<String>,
    pub attachments: Vec<Attachment>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Attachment payload on create/update; `uploadedAt` defaults to now.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentInput {
    pub name: String,
    pub url: String,
    pub uploaded_at: Option<Timestamp>,
}

/// DTO for creating a task. `createdBy` is set to the acting principal.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
    pub project: DocId,
    pub assigned_to: Option<DocId>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<Timestamp>,
    pub estimated_hours: Option<f64>,
    pub actual_hours: Option<f64>,
    pub tags: Option<Vec<String>>,
    pub attachments: Option<Vec<AttachmentInput>>,
}

/// DTO for a partial task update. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub project: Option<DocId>,
    pub assigned_to: Option<DocId>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<Timestamp>,
    pub estimated_hours: Option<f64>,
    pub actual_hours: Option<f64>,
    pub tags: Option<Vec<String>>,
    pub attachments: Option<Vec<AttachmentInput>>,
}

/// Exact-match conjunction over the task collection.
///
/// Only populated fields constrain the scan; an empty filter matches
/// every task.
#[derive(Debug, Default)]
pub struct TaskFilter {
    pub project: Option<DocId>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assigned_to: Option<DocId>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(project) = self.project {
            if task.project != project {
                return false;
            }
        }
        if let Some(ref status) = self.status {
            if task.status != *status {
                return false;
            }
        }
        if let Some(ref priority) = self.priority {
            if task.priority != *priority {
                return false;
            }
        }
        if let Some(assigned_to) = self.assigned_to {
            if task.assigned_to != Some(assigned_to) {
                return false;
            }
        }
        true
    }
}
