//! Repository for the user collection.

use taskhub_core::error::CoreError;
use taskhub_core::types::DocId;

use crate::models::{CreateUser, UpdateUser, User};
use crate::store::Store;

/// CRUD operations for users. Users are never deleted by this service.
pub struct UserRepo;

impl UserRepo {
    /// List all users, newest first.
    pub async fn list(store: &Store) -> Vec<User> {
        let mut users = store.users.find(|_| true).await;
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        users
    }

    /// Fetch a user by id.
    pub async fn get(store: &Store, id: DocId) -> Result<User, CoreError> {
        store
            .users
            .find_by_id(id)
            .await
            .ok_or(CoreError::NotFound { entity: "User", id })
    }

    /// Create a user. Email must be non-empty and unique.
    pub async fn create(store: &Store, input: CreateUser) -> Result<User, CoreError> {
        let name = input.name.trim().to_string();
        let email = input.email.trim().to_lowercase();

        if name.is_empty() {
            return Err(CoreError::Validation("Name is required".to_string()));
        }
        if email.is_empty() {
            return Err(CoreError::Validation("Email is required".to_string()));
        }
        if !store.users.find(|u| u.email == email).await.is_empty() {
            return Err(CoreError::Validation("Email already in use".to_string()));
        }

        let now = chrono::Utc::now();
        let user = store
            .users
            .insert_with(|id| User {
                id,
                name,
                email,
                avatar: input.avatar,
                created_at: now,
                updated_at: now,
            })
            .await;
        Ok(user)
    }

    /// Partially update a user.
    pub async fn update(store: &Store, id: DocId, input: UpdateUser) -> Result<User, CoreError> {
        let email = match input.email {
            Some(raw) => {
                let email = raw.trim().to_lowercase();
                if email.is_empty() {
                    return Err(CoreError::Validation("Email is required".to_string()));
                }
                let taken = store.users.find(|u| u.email == email && u.id != id).await;
                if !taken.is_empty() {
                    return Err(CoreError::Validation("Email already in use".to_string()));
                }
                Some(email)
            }
            None => None,
        };

        store
            .users
            .update_with(id, |user| {
                if let Some(name) = input.name {
                    user.name = name.trim().to_string();
                }
                if let Some(email) = email {
                    user.email = email;
                }
                if let Some(avatar) = input.avatar {
                    user.avatar = Some(avatar);
                }
                user.updated_at = chrono::Utc::now();
            })
            .await
            .ok_or(CoreError::NotFound { entity: "User", id })
    }
}
