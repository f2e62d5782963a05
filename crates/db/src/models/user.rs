//! User model: the identity principal referenced by every other entity.

use serde::{Deserialize, Serialize};

use taskhub_core::types::{DocId, Timestamp};

/// A user document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DocId,
    pub name: String,
    /// Unique across the collection, enforced at write time.
    pub email: String,
    pub avatar: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a user.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

/// DTO for a partial user update.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}
