//! Repository for the comment collection.
//!
//! Comments are the only entity with an authorship check on mutation:
//! update and delete verify the acting principal against the stored
//! author before touching the record.

use taskhub_core::comment::{ensure_author, validate_content};
use taskhub_core::error::CoreError;
use taskhub_core::types::DocId;

use crate::models::{Comment, CreateComment};
use crate::store::Store;
use crate::views::{self, CommentView};

/// CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// List the comment thread for a task, oldest first.
    pub async fn list_for_task(store: &Store, task: DocId) -> Vec<CommentView> {
        let mut comments = store.comments.find(|c| c.task == task).await;
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        let mut result = Vec::with_capacity(comments.len());
        for comment in comments {
            result.push(views::comment_view(store, comment).await);
        }
        result
    }

    /// Create a comment authored by the acting principal.
    ///
    /// The referenced task must exist; on failure nothing is persisted.
    pub async fn create(
        store: &Store,
        author: DocId,
        input: CreateComment,
    ) -> Result<CommentView, CoreError> {
        validate_content(&input.content)?;

        if !store.tasks.contains(input.task).await {
            return Err(CoreError::NotFound {
                entity: "Task",
                id: input.task,
            });
        }

        let now = chrono::Utc::now();
        let comment = store
            .comments
            .insert_with(|id| Comment {
                id,
                content: input.content.trim().to_string(),
                task: input.task,
                author,
                is_edited: false,
                edited_at: None,
                created_at: now,
                updated_at: now,
            })
            .await;

        Ok(views::comment_view(store, comment).await)
    }

    /// Edit a comment. Only the author may do this; edits stamp
    /// `is_edited` / `edited_at`.
    pub async fn update(
        store: &Store,
        id: DocId,
        principal: DocId,
        content: String,
    ) -> Result<CommentView, CoreError> {
        validate_content(&content)?;

        let existing = store
            .comments
            .find_by_id(id)
            .await
            .ok_or(CoreError::NotFound {
                entity: "Comment",
                id,
            })?;
        ensure_author(principal, existing.author)?;

        let comment = store
            .comments
            .update_with(id, |comment| {
                let now = chrono::Utc::now();
                comment.content = content.trim().to_string();
                comment.is_edited = true;
                comment.edited_at = Some(now);
                comment.updated_at = now;
            })
            .await
            .ok_or(CoreError::NotFound {
                entity: "Comment",
                id,
            })?;

        Ok(views::comment_view(store, comment).await)
    }

    /// Delete a comment. Only the author may do this.
    pub async fn delete(store: &Store, id: DocId, principal: DocId) -> Result<(), CoreError> {
        let existing = store
            .comments
            .find_by_id(id)
            .await
            .ok_or(CoreError::NotFound {
                entity: "Comment",
                id,
            })?;
        ensure_author(principal, existing.author)?;

        store.comments.remove(id).await;
        Ok(())
    }
}
