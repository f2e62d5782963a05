//! Project vocabulary and validation.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

pub const STATUS_PLANNING: &str = "planning";
pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_ON_HOLD: &str = "on-hold";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_ARCHIVED: &str = "archived";

/// All valid project status values.
pub const VALID_PROJECT_STATUSES: &[&str] = &[
    STATUS_PLANNING,
    STATUS_ACTIVE,
    STATUS_ON_HOLD,
    STATUS_COMPLETED,
    STATUS_ARCHIVED,
];

pub const PRIORITY_LOW: &str = "low";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_HIGH: &str = "high";
pub const PRIORITY_CRITICAL: &str = "critical";

/// All valid project priority values.
pub const VALID_PROJECT_PRIORITIES: &[&str] = &[
    PRIORITY_LOW,
    PRIORITY_MEDIUM,
    PRIORITY_HIGH,
    PRIORITY_CRITICAL,
];

/// Status applied when a project is created without one.
pub const DEFAULT_PROJECT_STATUS: &str = STATUS_PLANNING;
/// Priority applied when a project is created without one.
pub const DEFAULT_PROJECT_PRIORITY: &str = PRIORITY_MEDIUM;

/// Minimum project name length after trimming.
pub const MIN_NAME_LENGTH: usize = 3;
/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a project name: trimmed length must be at least [`MIN_NAME_LENGTH`].
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().chars().count() < MIN_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Project name must be at least {MIN_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a project description: at most [`MAX_DESCRIPTION_LENGTH`] characters.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Description cannot exceed {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate that the status is one of [`VALID_PROJECT_STATUSES`].
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_PROJECT_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid project status '{status}'. Must be one of: {}",
            VALID_PROJECT_STATUSES.join(", ")
        )))
    }
}

/// Validate that the priority is one of [`VALID_PROJECT_PRIORITIES`].
pub fn validate_priority(priority: &str) -> Result<(), CoreError> {
    if VALID_PROJECT_PRIORITIES.contains(&priority) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid project priority '{priority}'. Must be one of: {}",
            VALID_PROJECT_PRIORITIES.join(", ")
        )))
    }
}

/// Validate a budget figure: must be >= 0.
pub fn validate_budget(budget: f64) -> Result<(), CoreError> {
    if budget.is_finite() && budget >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Budget must be a non-negative number".to_string(),
        ))
    }
}

/// Validate a progress figure: must be between 0 and 100 inclusive.
pub fn validate_progress(progress: i32) -> Result<(), CoreError> {
    if (0..=100).contains(&progress) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Progress must be between 0 and 100".to_string(),
        ))
    }
}
