use serde::{Deserialize, Serialize};
use ts_core::types::{ExportFormat, NoteId};

/// Notifications the session emits for its hosting shell.
///
/// The shell decides how (and whether) to surface them, as toasts, status
/// lines, or not at all. Delivery is best-effort; a session with no
/// subscribers simply drops events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionEvent {
    NoteCreated { id: NoteId, title: String },
    NoteSaved { id: NoteId, title: String },
    NoteDeleted { id: NoteId, title: String },
    SelectionChanged { id: Option<NoteId> },
    StyleApplied { emphasis: String },
    ContentRewritten { id: NoteId },
    ExportRequested { format: ExportFormat },
}
