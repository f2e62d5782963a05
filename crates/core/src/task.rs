//! Task vocabulary, validation, and the completion lifecycle hook.
//!
//! A task's `completed_at` field is derived: it is set exactly once, the
//! first time an update moves the status to [`STATUS_DONE`], and is never
//! cleared by a later status change.

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

pub const STATUS_TODO: &str = "todo";
pub const STATUS_IN_PROGRESS: &str = "in-progress";
pub const STATUS_REVIEW: &str = "review";
pub const STATUS_DONE: &str = "done";
pub const STATUS_BLOCKED: &str = "blocked";

/// All valid task status values.
pub const VALID_TASK_STATUSES: &[&str] = &[
    STATUS_TODO,
    STATUS_IN_PROGRESS,
    STATUS_REVIEW,
    STATUS_DONE,
    STATUS_BLOCKED,
];

pub const PRIORITY_LOW: &str = "low";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_HIGH: &str = "high";
pub const PRIORITY_URGENT: &str = "urgent";

/// All valid task priority values.
pub const VALID_TASK_PRIORITIES: &[&str] =
    &[PRIORITY_LOW, PRIORITY_MEDIUM, PRIORITY_HIGH, PRIORITY_URGENT];

/// Status applied when a task is created without one.
pub const DEFAULT_TASK_STATUS: &str = STATUS_TODO;
/// Priority applied when a task is created without one.
pub const DEFAULT_TASK_PRIORITY: &str = PRIORITY_MEDIUM;

/// Minimum title length after trimming.
pub const MIN_TITLE_LENGTH: usize = 3;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a task title: trimmed length must be at least [`MIN_TITLE_LENGTH`].
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().chars().count() < MIN_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title must be at least {MIN_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate that the status is one of [`VALID_TASK_STATUSES`].
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_TASK_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid task status '{status}'. Must be one of: {}",
            VALID_TASK_STATUSES.join(", ")
        )))
    }
}

/// Validate that the priority is one of [`VALID_TASK_PRIORITIES`].
pub fn validate_priority(priority: &str) -> Result<(), CoreError> {
    if VALID_TASK_PRIORITIES.contains(&priority) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid task priority '{priority}'. Must be one of: {}",
            VALID_TASK_PRIORITIES.join(", ")
        )))
    }
}

/// Validate an hour figure (`estimatedHours` / `actualHours`): must be >= 0.
pub fn validate_hours(field: &str, hours: f64) -> Result<(), CoreError> {
    if hours.is_finite() && hours >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be a non-negative number"
        )))
    }
}

// ---------------------------------------------------------------------------
// Completion hook
// ---------------------------------------------------------------------------

/// Decide whether an update must stamp `completed_at`.
///
/// Returns `Some(now)` iff the update carries a status change to
/// [`STATUS_DONE`] and the task has never been completed before. Callers
/// apply the returned timestamp inside the same atomic write as the status
/// change itself, so there is no lost-update window.
pub fn completion_timestamp(
    new_status: Option<&str>,
    completed_at: Option<Timestamp>,
) -> Option<Timestamp> {
    if new_status == Some(STATUS_DONE) && completed_at.is_none() {
        Some(chrono::Utc::now())
    } else {
        None
    }
}
