/// Store-generated opaque document identifier.
pub type DocId = uuid::Uuid;

/// UTC timestamp used across all models.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
