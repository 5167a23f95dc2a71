//! # Active Session Controller
//!
//! Tracks which note is being edited, buffers title/content edits away from
//! the committed collection, and decides when buffered edits are flushed:
//! on switching notes, on focus loss, before teardown, or after an idle
//! debounce window.

pub mod controller;
pub mod error;
pub mod events;

pub use controller::{EditorBuffer, NoteSession, DEFAULT_DEBOUNCE, SUGGESTION_FALLBACK_TEXT};
pub use error::SessionError;
pub use events::SessionEvent;
