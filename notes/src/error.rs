use thiserror::Error;
use ts_core::types::NoteId;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Note not found: {id}")]
    NotFound { id: NoteId },
    #[error("Snapshot store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    pub(crate) fn store(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Store(Box::new(err))
    }
}
