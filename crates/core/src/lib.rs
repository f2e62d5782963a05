//! Domain vocabularies, validation, and pure logic for the task management
//! service.
//!
//! This crate has no knowledge of HTTP or the document store. It owns the
//! status/priority vocabularies, write-time validation functions, the
//! comment authorship guard, the task completion hook decision, and the
//! statistics tally.

pub mod comment;
pub mod error;
pub mod project;
pub mod stats;
pub mod task;
pub mod types;
