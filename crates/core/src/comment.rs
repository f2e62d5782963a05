//! Comment validation and the authorship guard.
//!
//! Comments are the only entity with a mutation authorization check: only
//! the author may update or delete one. Tasks and projects deliberately
//! carry no equivalent check.

use crate::error::CoreError;
use crate::types::DocId;

/// Validate comment content: must be non-empty after trimming.
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Comment content is required".to_string(),
        ));
    }
    Ok(())
}

/// Require that the acting principal is the comment's author.
pub fn ensure_author(principal: DocId, author: DocId) -> Result<(), CoreError> {
    if principal == author {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "Not authorized to modify this comment".to_string(),
        ))
    }
}
