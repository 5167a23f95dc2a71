use notes::RepositoryError;
use thiserror::Error;
use ts_core::types::NoteId;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No note is currently active")]
    NoActiveNote,
    #[error("Unknown note: {id}")]
    UnknownNote { id: NoteId },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
