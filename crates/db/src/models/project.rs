//! Project model and list filter.

use serde::{Deserialize, Serialize};

use taskhub_core::types::{DocId, Timestamp};

/// A project document.
///
/// The task relationship is derived by reverse lookup at read time, never
/// stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DocId,
    pub name: String,
    pub description: Option<String>,
    /// The creating principal. Must reference an existing user at creation.
    pub owner: DocId,
    pub members: Vec<DocId>,
    pub status: String,
    pub priority: String,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub tags: Vec<String>,
    pub budget: Option<f64>,
    pub progress: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project. The owner is never client-supplied; it is
/// set to the acting principal.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
    pub members: Option<Vec<DocId>>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub tags: Option<Vec<String>>,
    pub budget: Option<f64>,
    pub progress: Option<i32>,
}

/// DTO for a partial project update. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub members: Option<Vec<DocId>>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub tags: Option<Vec<String>>,
    pub budget: Option<f64>,
    pub progress: Option<i32>,
}

/// Exact-match conjunction over the project collection.
///
/// Only populated fields constrain the scan.
#[derive(Debug, Default)]
pub struct ProjectFilter {
    pub status: Option<String>,
    pub priority: Option<String>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(ref status) = self.status {
            if project.status != *status {
                return false;
            }
        }
        if let Some(ref priority) = self.priority {
            if project.priority != *priority {
                return false;
            }
        }
        true
    }
}
