//! # Storage Layer
//!
//! Snapshot persistence for the note collection (JSON file, in-memory).

pub mod error;
pub mod file;
pub mod memory;

pub use error::SnapshotError;
pub use file::{FileStore, SNAPSHOT_FILE};
pub use memory::MemoryStore;
