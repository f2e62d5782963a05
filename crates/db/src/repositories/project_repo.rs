//! Repository for the project collection.

use taskhub_core::error::CoreError;
use taskhub_core::project::{
    validate_budget, validate_description, validate_name, validate_priority, validate_progress,
    validate_status, DEFAULT_PROJECT_PRIORITY, DEFAULT_PROJECT_STATUS,
};
use taskhub_core::types::DocId;

use crate::models::{CreateProject, Project, ProjectFilter, UpdateProject};
use crate::store::Store;
use crate::views::{self, ProjectDetailView, ProjectView};

fn trim_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter().map(|t| t.trim().to_string()).collect()
}

fn validate_optional_fields(
    description: Option<&str>,
    budget: Option<f64>,
    progress: Option<i32>,
) -> Result<(), CoreError> {
    if let Some(description) = description {
        validate_description(description)?;
    }
    if let Some(budget) = budget {
        validate_budget(budget)?;
    }
    if let Some(progress) = progress {
        validate_progress(progress)?;
    }
    Ok(())
}

/// CRUD operations and filtering for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List projects matching the filter, newest first, references expanded.
    pub async fn list(store: &Store, filter: &ProjectFilter) -> Vec<ProjectView> {
        let mut projects = store.projects.find(|p| filter.matches(p)).await;
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let mut result = Vec::with_capacity(projects.len());
        for project in projects {
            result.push(views::project_view(store, project).await);
        }
        result
    }

    /// Fetch one project with its derived task list expanded.
    pub async fn get_detail(store: &Store, id: DocId) -> Result<ProjectDetailView, CoreError> {
        let project = store
            .projects
            .find_by_id(id)
            .await
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })?;
        Ok(views::project_detail_view(store, project).await)
    }

    /// Create a project owned by the acting principal.
    ///
    /// The owner must exist as a user; on failure nothing is persisted.
    pub async fn create(
        store: &Store,
        owner: DocId,
        input: CreateProject,
    ) -> Result<ProjectView, CoreError> {
        validate_name(&input.name)?;

        let status = input
            .status
            .unwrap_or_else(|| DEFAULT_PROJECT_STATUS.to_string());
        validate_status(&status)?;

        let priority = input
            .priority
            .unwrap_or_else(|| DEFAULT_PROJECT_PRIORITY.to_string());
        validate_priority(&priority)?;

        validate_optional_fields(input.description.as_deref(), input.budget, input.progress)?;

        if !store.users.contains(owner).await {
            return Err(CoreError::NotFound {
                entity: "User",
                id: owner,
            });
        }

        let now = chrono::Utc::now();
        let project = store
            .projects
            .insert_with(|id| Project {
                id,
                name: input.name.trim().to_string(),
                description: input.description.map(|d| d.trim().to_string()),
                owner,
                members: input.members.unwrap_or_default(),
                status,
                priority,
                start_date: input.start_date.unwrap_or(now),
                end_date: input.end_date,
                tags: trim_tags(input.tags.unwrap_or_default()),
                budget: input.budget,
                progress: input.progress.unwrap_or(0),
                created_at: now,
                updated_at: now,
            })
            .await;

        Ok(views::project_view(store, project).await)
    }

    /// Partially update a project. Any authenticated principal may mutate
    /// any project; only comments carry an authorship guard.
    pub async fn update(
        store: &Store,
        id: DocId,
        input: UpdateProject,
    ) -> Result<ProjectView, CoreError> {
        if let Some(ref name) = input.name {
            validate_name(name)?;
        }
        if let Some(ref status) = input.status {
            validate_status(status)?;
        }
        if let Some(ref priority) = input.priority {
            validate_priority(priority)?;
        }
        validate_optional_fields(input.description.as_deref(), input.budget, input.progress)?;

        let project = store
            .projects
            .update_with(id, |project| {
                if let Some(name) = input.name {
                    project.name = name.trim().to_string();
                }
                if let Some(description) = input.description {
                    project.description = Some(description.trim().to_string());
                }
                if let Some(members) = input.members {
                    project.members = members;
                }
                if let Some(status) = input.status {
                    project.status = status;
                }
                if let Some(priority) = input.priority {
                    project.priority = priority;
                }
                if let Some(start_date) = input.start_date {
                    project.start_date = start_date;
                }
                if let Some(end_date) = input.end_date {
                    project.end_date = Some(end_date);
                }
                if let Some(tags) = input.tags {
                    project.tags = trim_tags(tags);
                }
                if let Some(budget) = input.budget {
                    project.budget = Some(budget);
                }
                if let Some(progress) = input.progress {
                    project.progress = progress;
                }
                project.updated_at = chrono::Utc::now();
            })
            .await
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })?;

        Ok(views::project_view(store, project).await)
    }

    /// Delete a project. Its tasks are left behind as orphans; no cascade.
    pub async fn delete(store: &Store, id: DocId) -> Result<(), CoreError> {
        if store.projects.remove(id).await {
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: "Project",
                id,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    use crate::models::CreateUser;
    use crate::repositories::UserRepo;

    async fn seed_user(store: &Store, email: &str) -> DocId {
        UserRepo::create(
            store,
            CreateUser {
                name: "Owner".to_string(),
                email: email.to_string(),
                avatar: None,
            },
        )
        .await
        .unwrap()
        .id
    }

    fn new_project(name: &str) -> CreateProject {
        CreateProject {
            name: name.to_string(),
            description: None,
            members: None,
            status: None,
            priority: None,
            start_date: None,
            end_date: None,
            tags: None,
            budget: None,
            progress: None,
        }
    }

    #[tokio::test]
    async fn create_requires_existing_owner() {
        let store = Store::new();
        let err = ProjectRepo::create(&store, uuid::Uuid::now_v7(), new_project("Launch"))
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "User", .. });
        assert_eq!(store.projects.count().await, 0);
    }

    #[tokio::test]
    async fn create_applies_defaults_and_expands_owner() {
        let store = Store::new();
        let owner = seed_user(&store, "o@example.com").await;

        let view = ProjectRepo::create(&store, owner, new_project("Launch"))
            .await
            .unwrap();
        assert_eq!(view.status, "planning");
        assert_eq!(view.priority, "medium");
        assert_eq!(view.progress, 0);
        assert_eq!(view.owner.as_ref().unwrap().id, owner);
    }

    #[tokio::test]
    async fn list_filters_by_status_and_priority() {
        let store = Store::new();
        let owner = seed_user(&store, "o@example.com").await;

        let mut active = new_project("Active one");
        active.status = Some("active".to_string());
        active.priority = Some("high".to_string());
        ProjectRepo::create(&store, owner, active).await.unwrap();
        ProjectRepo::create(&store, owner, new_project("Planned one"))
            .await
            .unwrap();

        let hits = ProjectRepo::list(
            &store,
            &ProjectFilter {
                status: Some("active".to_string()),
                priority: Some("high".to_string()),
            },
        )
        .await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Active one");
    }

    #[tokio::test]
    async fn update_rejects_out_of_range_progress() {
        let store = Store::new();
        let owner = seed_user(&store, "o@example.com").await;
        let project = ProjectRepo::create(&store, owner, new_project("Launch"))
            .await
            .unwrap();

        let err = ProjectRepo::update(
            &store,
            project.id,
            UpdateProject {
                progress: Some(150),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert_matches!(err, CoreError::Validation(_));

        // Record unchanged.
        let detail = ProjectRepo::get_detail(&store, project.id).await.unwrap();
        assert_eq!(detail.project.progress, 0);
    }

    #[tokio::test]
    async fn detail_embeds_tasks_newest_first() {
        let store = Store::new();
        let owner = seed_user(&store, "o@example.com").await;
        let project = ProjectRepo::create(&store, owner, new_project("Launch"))
            .await
            .unwrap();

        let first = crate::repositories::TaskRepo::create(
            &store,
            owner,
            crate::models::CreateTask {
                title: "First task".to_string(),
                description: None,
                project: project.id,
                assigned_to: Some(owner),
                status: None,
                priority: None,
                due_date: None,
                estimated_hours: None,
                actual_hours: None,
                tags: None,
                attachments: None,
            },
        )
        .await
        .unwrap();
        let second = crate::repositories::TaskRepo::create(
            &store,
            owner,
            crate::models::CreateTask {
                title: "Second task".to_string(),
                description: None,
                project: project.id,
                assigned_to: None,
                status: None,
                priority: None,
                due_date: None,
                estimated_hours: None,
                actual_hours: None,
                tags: None,
                attachments: None,
            },
        )
        .await
        .unwrap();

        let detail = ProjectRepo::get_detail(&store, project.id).await.unwrap();
        assert_eq!(detail.tasks.len(), 2);
        assert_eq!(detail.tasks[0].id, second.id);
        assert_eq!(detail.tasks[1].id, first.id);
        // assignedTo is expanded inside the embedded task.
        assert_eq!(detail.tasks[1].assigned_to.as_ref().unwrap().id, owner);
    }
}
