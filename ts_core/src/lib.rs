//! # TypeSet Core
//!
//! Shared types and traits for the TypeSet note core.
//!
//! This crate provides:
//! - The note data model and its wire format
//! - Style state and suggestion records
//! - Core traits for storage adapters and suggestion services

pub mod traits;
pub mod types;

// Re-export commonly used types for convenience
pub use traits::{SnapshotStore, SuggestionService};
pub use types::{ExportFormat, Note, NoteId, StyleSuggestion, StyleValue};
