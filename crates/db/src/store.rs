//! In-memory document store.
//!
//! Each entity lives in its own [`Collection`]: a `HashMap` keyed by
//! store-generated [`DocId`]s behind a `tokio::sync::RwLock`. The store
//! serializes individual document writes; [`Collection::update_with`]
//! applies a whole read-modify-write under one write-lock acquisition, so
//! derived-field updates (like a task's completion timestamp) land in the
//! same atomic write as the triggering change. There are no cross-document
//! transactions; concurrent updates to the same document are
//! last-write-wins.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use taskhub_core::types::DocId;

use crate::models::{Comment, Project, Task, User};

/// A single collection of documents keyed by id.
///
/// Thread-safe via interior `RwLock`; designed to be reached through a
/// shared [`Store`] wrapped in `Arc`.
pub struct Collection<T> {
    docs: RwLock<HashMap<DocId, T>>,
}

impl<T: Clone> Collection<T> {
    fn new() -> Self {
        Self {
            docs: RwLock::new(HashMap::new()),
        }
    }

    /// Insert a new document, generating its id.
    ///
    /// The builder closure receives the generated id so the document can
    /// carry it as a field. Returns the stored document.
    pub async fn insert_with(&self, build: impl FnOnce(DocId) -> T) -> T {
        let id = Uuid::now_v7();
        let doc = build(id);
        self.docs.write().await.insert(id, doc.clone());
        doc
    }

    /// Fetch a document by id.
    pub async fn find_by_id(&self, id: DocId) -> Option<T> {
        self.docs.read().await.get(&id).cloned()
    }

    /// Whether a document with this id exists.
    pub async fn contains(&self, id: DocId) -> bool {
        self.docs.read().await.contains_key(&id)
    }

    /// Full scan returning every document matching the predicate.
    ///
    /// Ordering is up to the caller; repositories sort by creation time.
    pub async fn find(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.docs
            .read()
            .await
            .values()
            .filter(|doc| predicate(doc))
            .cloned()
            .collect()
    }

    /// Apply a mutation to a document as a single atomic write.
    ///
    /// Returns the updated document, or `None` if the id is absent. The
    /// closure runs under the collection write lock.
    pub async fn update_with(&self, id: DocId, apply: impl FnOnce(&mut T)) -> Option<T> {
        let mut docs = self.docs.write().await;
        let doc = docs.get_mut(&id)?;
        apply(doc);
        Some(doc.clone())
    }

    /// Remove a document. Returns `true` if it existed.
    pub async fn remove(&self, id: DocId) -> bool {
        self.docs.write().await.remove(&id).is_some()
    }

    /// Number of documents in the collection.
    pub async fn count(&self) -> usize {
        self.docs.read().await.len()
    }
}

/// The full document store: one collection per entity.
///
/// Wrap in `Arc` and share across handlers.
pub struct Store {
    pub users: Collection<User>,
    pub projects: Collection<Project>,
    pub tasks: Collection<Task>,
    pub comments: Collection<Comment>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            users: Collection::new(),
            projects: Collection::new(),
            tasks: Collection::new(),
            comments: Collection::new(),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
