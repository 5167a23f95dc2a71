use thiserror::Error;

/// Failures surfaced by the file-backed snapshot store.
///
/// `Corrupt` is kept separate from `Io` so that callers can distinguish
/// "the payload on disk is unreadable" from "the disk is unhappy"; the
/// repository falls back to seeding only for load failures.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot payload is not valid note JSON: {reason}")]
    Corrupt { reason: String },

    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}
