//! Document store and repositories for the task management service.
//!
//! Records live in an in-memory document store ([`store::Store`]): one
//! collection per entity, keyed by store-generated ids. Repositories own
//! write-time validation and referential existence checks; the
//! [`views`] module shapes API responses by resolving references through
//! explicit lookups.

pub mod models;
pub mod repositories;
pub mod store;
pub mod views;

pub use store::Store;
