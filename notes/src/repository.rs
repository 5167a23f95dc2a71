use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use ts_core::traits::SnapshotStore;
use ts_core::types::{Note, NoteId};

use crate::error::RepositoryError;
use crate::seed::starter_notes;

/// Result of committing editor text back into the collection.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// Fields differed; the note was updated and the snapshot rewritten.
    Saved(Note),
    /// Title and content already matched; nothing was written.
    Unchanged,
}

/// Ordered note collection.
///
/// Notes live newest-first: `create` prepends. Every mutation is written
/// through to the snapshot store after the in-memory copy is updated, so a
/// failed write leaves the change visible in memory and the error with the
/// caller.
pub struct NoteRepository<S: SnapshotStore> {
    store: Arc<S>,
    notes: RwLock<Vec<Note>>,
}

impl<S: SnapshotStore> NoteRepository<S>
where
    S::Error: std::error::Error + Send + Sync + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            notes: RwLock::new(Vec::new()),
        }
    }

    /// Load the persisted collection, seeding the starter notes when no
    /// usable snapshot exists. Returns `true` when seeding happened.
    ///
    /// An unreadable snapshot is treated the same as a missing one; the
    /// corrupt payload is logged and replaced by seeds on the next save.
    pub async fn initialize(&self) -> Result<bool, RepositoryError> {
        let loaded = match self.store.load().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load note snapshot, reseeding");
                None
            }
        };

        match loaded {
            Some(notes) => {
                tracing::debug!(count = notes.len(), "Loaded note snapshot");
                *self.notes.write().await = notes;
                Ok(false)
            }
            None => {
                let seeds = starter_notes();
                self.store
                    .save(&seeds)
                    .await
                    .map_err(RepositoryError::store)?;
                *self.notes.write().await = seeds;
                Ok(true)
            }
        }
    }

    /// Add a note at the front of the collection.
    pub async fn create(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Note, RepositoryError> {
        let note = Note::new(title, content);
        let mut notes = self.notes.write().await;
        notes.insert(0, note.clone());
        self.persist(&notes).await?;
        Ok(note)
    }

    pub async fn get(&self, id: &NoteId) -> Option<Note> {
        self.notes.read().await.iter().find(|n| n.id == *id).cloned()
    }

    /// Write editor text back into the note, bumping `updated_at` only when
    /// something actually changed.
    pub async fn commit(
        &self,
        id: &NoteId,
        title: &str,
        content: &str,
    ) -> Result<CommitOutcome, RepositoryError> {
        let mut notes = self.notes.write().await;
        let Some(note) = notes.iter_mut().find(|n| n.id == *id) else {
            return Err(RepositoryError::NotFound { id: id.clone() });
        };

        if note.title == title && note.content == content {
            return Ok(CommitOutcome::Unchanged);
        }

        note.title = title.to_string();
        note.content = content.to_string();
        note.updated_at = Utc::now();
        let updated = note.clone();

        self.persist(&notes).await?;
        Ok(CommitOutcome::Saved(updated))
    }

    /// Remove a note, returning it for presentation.
    pub async fn delete(&self, id: &NoteId) -> Result<Note, RepositoryError> {
        let mut notes = self.notes.write().await;
        let Some(pos) = notes.iter().position(|n| n.id == *id) else {
            return Err(RepositoryError::NotFound { id: id.clone() });
        };
        let removed = notes.remove(pos);
        self.persist(&notes).await?;
        Ok(removed)
    }

    /// Snapshot of the collection in display order (newest first).
    pub async fn list(&self) -> Vec<Note> {
        self.notes.read().await.clone()
    }

    /// Case-insensitive substring match over titles and content.
    pub async fn search(&self, query: &str) -> Vec<Note> {
        let needle = query.to_lowercase();
        self.notes
            .read()
            .await
            .iter()
            .filter(|n| {
                n.title.to_lowercase().contains(&needle)
                    || n.content.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }

    async fn persist(&self, notes: &[Note]) -> Result<(), RepositoryError> {
        self.store.save(notes).await.map_err(RepositoryError::store)
    }
}
