//! # Note Repository
//!
//! Ordered in-memory note collection with snapshot persistence and
//! first-run seeding.

pub mod error;
pub mod repository;
pub mod seed;

pub use error::RepositoryError;
pub use repository::{CommitOutcome, NoteRepository};
pub use seed::starter_notes;
