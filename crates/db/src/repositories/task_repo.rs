//! Repository for the task collection.
//!
//! Owns write-time validation, the project existence check on create, the
//! completion lifecycle hook on update, and the statistics summary.

use serde::Serialize;

use taskhub_core::error::CoreError;
use taskhub_core::stats::tally;
use taskhub_core::task::{
    completion_timestamp, validate_hours, validate_priority, validate_status, validate_title,
    DEFAULT_TASK_PRIORITY, DEFAULT_TASK_STATUS,
};
use taskhub_core::types::DocId;

use crate::models::{Attachment, AttachmentInput, CreateTask, Task, TaskFilter, UpdateTask};
use crate::store::Store;
use crate::views::{self, TaskDetailView, TaskView};

/// Count of tasks sharing one status value.
#[derive(Debug, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// Count of tasks sharing one priority value.
#[derive(Debug, Serialize)]
pub struct PriorityCount {
    pub priority: String,
    pub count: usize,
}

/// Global task statistics: a full count plus grouped counts by status and
/// by priority. Unobserved values are omitted (no zero-fill).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub by_status: Vec<StatusCount>,
    pub by_priority: Vec<PriorityCount>,
}

fn materialize_attachments(inputs: Vec<AttachmentInput>) -> Vec<Attachment> {
    inputs
        .into_iter()
        .map(|a| Attachment {
            name: a.name.trim().to_string(),
            url: a.url,
            uploaded_at: a.uploaded_at.unwrap_or_else(chrono::Utc::now),
        })
        .collect()
}

fn trim_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter().map(|t| t.trim().to_string()).collect()
}

/// CRUD, filtering, and statistics for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// List tasks matching the filter, newest first, references expanded.
    pub async fn list(store: &Store, filter: &TaskFilter) -> Vec<TaskView> {
        let mut tasks = store.tasks.find(|t| filter.matches(t)).await;
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let mut result = Vec::with_capacity(tasks.len());
        for task in tasks {
            result.push(views::task_view(store, task).await);
        }
        result
    }

    /// Fetch one task with references and its comment thread expanded.
    pub async fn get_detail(store: &Store, id: DocId) -> Result<TaskDetailView, CoreError> {
        let task = store
            .tasks
            .find_by_id(id)
            .await
            .ok_or(CoreError::NotFound { entity: "Task", id })?;
        Ok(views::task_detail_view(store, task).await)
    }

    /// Create a task for the given principal.
    ///
    /// The referenced project must exist; on failure nothing is persisted.
    pub async fn create(
        store: &Store,
        created_by: DocId,
        input: CreateTask,
    ) -> Result<TaskView, CoreError> {
        validate_title(&input.title)?;

        let status = input
            .status
            .unwrap_or_else(|| DEFAULT_TASK_STATUS.to_string());
        validate_status(&status)?;

        let priority = input
            .priority
            .unwrap_or_else(|| DEFAULT_TASK_PRIORITY.to_string());
        validate_priority(&priority)?;

        if let Some(hours) = input.estimated_hours {
            validate_hours("estimatedHours", hours)?;
        }
        if let Some(hours) = input.actual_hours {
            validate_hours("actualHours", hours)?;
        }

        if !store.projects.contains(input.project).await {
            return Err(CoreError::NotFound {
                entity: "Project",
                id: input.project,
            });
        }

        let now = chrono::Utc::now();
        let task = store
            .tasks
            .insert_with(|id| Task {
                id,
                title: input.title.trim().to_string(),
                description: input.description.map(|d| d.trim().to_string()),
                project: input.project,
                assigned_to: input.assigned_to,
                created_by,
                status,
                priority,
                due_date: input.due_date,
                estimated_hours: input.estimated_hours,
                actual_hours: input.actual_hours,
                tags: trim_tags(input.tags.unwrap_or_default()),
                attachments: materialize_attachments(input.attachments.unwrap_or_default()),
                completed_at: None,
                created_at: now,
                updated_at: now,
            })
            .await;

        Ok(views::task_view(store, task).await)
    }

    /// Partially update a task.
    ///
    /// If the update moves the status to "done" and the task has never been
    /// completed, `completed_at` is stamped inside the same atomic write.
    pub async fn update(
        store: &Store,
        id: DocId,
        input: UpdateTask,
    ) -> Result<TaskView, CoreError> {
        if let Some(ref title) = input.title {
            validate_title(title)?;
        }
        if let Some(ref status) = input.status {
            validate_status(status)?;
        }
        if let Some(ref priority) = input.priority {
            validate_priority(priority)?;
        }
        if let Some(hours) = input.estimated_hours {
            validate_hours("estimatedHours", hours)?;
        }
        if let Some(hours) = input.actual_hours {
            validate_hours("actualHours", hours)?;
        }

        let task = store
            .tasks
            .update_with(id, |task| {
                if let Some(stamp) =
                    completion_timestamp(input.status.as_deref(), task.completed_at)
                {
                    task.completed_at = Some(stamp);
                }
                if let Some(title) = input.title {
                    task.title = title.trim().to_string();
                }
                if let Some(description) = input.description {
                    task.description = Some(description.trim().to_string());
                }
                if let Some(project) = input.project {
                    task.project = project;
                }
                if let Some(assigned_to) = input.assigned_to {
                    task.assigned_to = Some(assigned_to);
                }
                if let Some(status) = input.status {
                    task.status = status;
                }
                if let Some(priority) = input.priority {
                    task.priority = priority;
                }
                if let Some(due_date) = input.due_date {
                    task.due_date = Some(due_date);
                }
                if let Some(hours) = input.estimated_hours {
                    task.estimated_hours = Some(hours);
                }
                if let Some(hours) = input.actual_hours {
                    task.actual_hours = Some(hours);
                }
                if let Some(tags) = input.tags {
                    task.tags = trim_tags(tags);
                }
                if let Some(attachments) = input.attachments {
                    task.attachments = materialize_attachments(attachments);
                }
                task.updated_at = chrono::Utc::now();
            })
            .await
            .ok_or(CoreError::NotFound { entity: "Task", id })?;

        Ok(views::task_view(store, task).await)
    }

    /// Delete a task. Its comments are left behind as orphans; no cascade.
    pub async fn delete(store: &Store, id: DocId) -> Result<(), CoreError> {
        if store.tasks.remove(id).await {
            Ok(())
        } else {
            Err(CoreError::NotFound { entity: "Task", id })
        }
    }

    /// Compute global task statistics with a full collection scan.
    ///
    /// `total` is an independent unfiltered count.
    pub async fn stats(store: &Store) -> TaskStats {
        let tasks = store.tasks.find(|_| true).await;

        let by_status = tally(tasks.iter().map(|t| t.status.as_str()))
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect();
        let by_priority = tally(tasks.iter().map(|t| t.priority.as_str()))
            .into_iter()
            .map(|(priority, count)| PriorityCount { priority, count })
            .collect();

        TaskStats {
            total: store.tasks.count().await,
            by_status,
            by_priority,
        }
    }
}
