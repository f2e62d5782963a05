//! Population/projection layer: response-shaping views.
//!
//! Each (entity, view) pair gets an explicit projection struct. Reference
//! fields are resolved through direct id lookups against the store (the
//! raw records stay keyed by id; nothing here is persisted back). A
//! dangling reference degrades to `null` in the response instead of
//! failing it.

use serde::Serialize;

use taskhub_core::types::{DocId, Timestamp};

use crate::models::{Attachment, Comment, Project, Task, User};
use crate::store::Store;

// ---------------------------------------------------------------------------
// Reference projections
// ---------------------------------------------------------------------------

/// Minimal user projection: name and email only (e.g. `createdBy`, `owner`).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: DocId,
    pub name: String,
    pub email: String,
}

impl UserRef {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// User projection including the avatar (e.g. `assignedTo`, `author`,
/// `members`).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: DocId,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

impl UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
        }
    }
}

/// Project projection embedded in task views. The description is included
/// only on the task detail view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    pub id: DocId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Task views
// ---------------------------------------------------------------------------

/// Task with its references expanded (list, create, and update responses).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    pub id: DocId,
    pub title: String,
    pub description: Option<String>,
    pub project: Option<ProjectRef>,
    pub assigned_to: Option<UserSummary>,
    pub created_by: Option<UserRef>,
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

/// Task detail view: references expanded plus the derived comment thread,
/// oldest first, each comment's author projected.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetailView {
    #[serde(flatten)]
    pub task: TaskView,
    pub comments: Vec<CommentView>,
}

/// Task embedded in a project detail view: only `assignedTo` is expanded;
/// the project and creator stay as raw ids.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTaskView {
    pub id: DocId,
    pub title: String,
    pub description: Option<String>,
    pub project: DocId,
    pub assigned_to: Option<UserSummary>,
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

// ---------------------------------------------------------------------------
// Project views
// ---------------------------------------------------------------------------

/// Project with owner and members expanded (list, create, and update
/// responses).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: DocId,
    pub name: String,
    pub description: Option<String>,
    pub owner: Option<UserRef>,
    pub members: Vec<UserSummary>,
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

/// Project detail view: [`ProjectView`] plus the derived task list,
/// newest first.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetailView {
    #[serde(flatten)]
    pub project: ProjectView,
    pub tasks: Vec<ProjectTaskView>,
}

// ---------------------------------------------------------------------------
// Comment view
// ---------------------------------------------------------------------------

/// Comment with its author expanded. The task reference stays a raw id.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: DocId,
    pub content: String,
    pub task: DocId,
    pub author: Option<UserSummary>,
    pub is_edited: bool,
    pub edited_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

async fn user_ref(store: &Store, id: DocId) -> Option<UserRef> {
    store.users.find_by_id(id).await.map(UserRef::from)
}

async fn user_summary(store: &Store, id: DocId) -> Option<UserSummary> {
    store.users.find_by_id(id).await.map(UserSummary::from)
}

async fn project_ref(store: &Store, id: DocId, with_description: bool) -> Option<ProjectRef> {
    let project = store.projects.find_by_id(id).await?;
    Some(ProjectRef {
        id: project.id,
        name: project.name,
        description: if with_description {
            project.description
        } else {
            None
        },
    })
}

/// Expand a task's references for list/mutation responses.
pub async fn task_view(store: &Store, task: Task) -> TaskView {
    task_view_inner(store, task, false).await
}

async fn task_view_inner(store: &Store, task: Task, with_project_description: bool) -> TaskView {
    let project = project_ref(store, task.project, with_project_description).await;
    let assigned_to = match task.assigned_to {
        Some(id) => user_summary(store, id).await,
        None => None,
    };
    let created_by = user_ref(store, task.created_by).await;

    TaskView {
        id: task.id,
        title: task.title,
        description: task.description,
        project,
        assigned_to,
        created_by,
        status: task.status,
        priority: task.priority,
        due_date: task.due_date,
        estimated_hours: task.estimated_hours,
        actual_hours: task.actual_hours,
        tags: task.tags,
        attachments: task.attachments,
        completed_at: task.completed_at,
        created_at: task.created_at,
        updated_at: task.updated_at,
    }
}

/// Expand a task's references plus its comment thread (oldest first).
pub async fn task_detail_view(store: &Store, task: Task) -> TaskDetailView {
    let task_id = task.id;
    let view = task_view_inner(store, task, true).await;

    let mut comments = store.comments.find(|c| c.task == task_id).await;
    comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

    let mut comment_views = Vec::with_capacity(comments.len());
    for comment in comments {
        comment_views.push(comment_view(store, comment).await);
    }

    TaskDetailView {
        task: view,
        comments: comment_views,
    }
}

/// Project a task for embedding in a project detail view.
async fn project_task_view(store: &Store, task: Task) -> ProjectTaskView {
    let assigned_to = match task.assigned_to {
        Some(id) => user_summary(store, id).await,
        None => None,
    };

    ProjectTaskView {
        id: task.id,
        title: task.title,
        description: task.description,
        project: task.project,
        assigned_to,
        created_by: task.created_by,
        status: task.status,
        priority: task.priority,
        due_date: task.due_date,
        estimated_hours: task.estimated_hours,
        actual_hours: task.actual_hours,
        tags: task.tags,
        attachments: task.attachments,
        completed_at: task.completed_at,
        created_at: task.created_at,
        updated_at: task.updated_at,
    }
}

/// Expand a project's owner and members for list/mutation responses.
///
/// Dangling member references are dropped from the list rather than
/// rendered as nulls.
pub async fn project_view(store: &Store, project: Project) -> ProjectView {
    let owner = user_ref(store, project.owner).await;

    let mut members = Vec::with_capacity(project.members.len());
    for member_id in &project.members {
        if let Some(member) = user_summary(store, *member_id).await {
            members.push(member);
        }
    }

    ProjectView {
        id: project.id,
        name: project.name,
        description: project.description,
        owner,
        members,
        status: project.status,
        priority: project.priority,
        start_date: project.start_date,
        end_date: project.end_date,
        tags: project.tags,
        budget: project.budget,
        progress: project.progress,
        created_at: project.created_at,
        updated_at: project.updated_at,
    }
}

/// Expand a project plus its derived task list (newest first).
pub async fn project_detail_view(store: &Store, project: Project) -> ProjectDetailView {
    let project_id = project.id;
    let view = project_view(store, project).await;

    let mut tasks = store.tasks.find(|t| t.project == project_id).await;
    tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

    let mut task_views = Vec::with_capacity(tasks.len());
    for task in tasks {
        task_views.push(project_task_view(store, task).await);
    }

    ProjectDetailView {
        project: view,
        tasks: task_views,
    }
}

/// Expand a comment's author.
pub async fn comment_view(store: &Store, comment: Comment) -> CommentView {
    let author = user_summary(store, comment.author).await;

    CommentView {
        id: comment.id,
        content: comment.content,
        task: comment.task,
        author,
        is_edited: comment.is_edited,
        edited_at: comment.edited_at,
        created_at: comment.created_at,
        updated_at: comment.updated_at,
    }
}
