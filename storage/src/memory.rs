use std::convert::Infallible;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use ts_core::traits::SnapshotStore;
use ts_core::types::Note;

/// In-memory snapshot store.
///
/// Used by tests and by the CLI's `--ephemeral` mode. Counts how many times
/// `save` ran so tests can assert that no-op commits skip persistence.
#[derive(Default)]
pub struct MemoryStore {
    snapshot: RwLock<Option<Vec<Note>>>,
    saves: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a pre-existing snapshot instead of an empty store.
    pub fn with_snapshot(notes: Vec<Note>) -> Self {
        Self {
            snapshot: RwLock::new(Some(notes)),
            saves: AtomicU64::new(0),
        }
    }

    /// Number of `save` calls since construction.
    pub fn save_count(&self) -> u64 {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    type Error = Infallible;

    async fn load(&self) -> Result<Option<Vec<Note>>, Self::Error> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn save(&self, notes: &[Note]) -> Result<(), Self::Error> {
        *self.snapshot.write().await = Some(notes.to_vec());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
