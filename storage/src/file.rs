use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use ts_core::traits::SnapshotStore;
use ts_core::types::Note;
use uuid::Uuid;

use crate::error::SnapshotError;

/// File name the snapshot lives under. Part of the on-disk contract; do
/// not rename without a migration.
pub const SNAPSHOT_FILE: &str = "typeset-notes.json";

/// Snapshot store backed by a single JSON file.
///
/// Writes go through a temp file in the same directory followed by a
/// rename, so a crash mid-write leaves the previous snapshot intact.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Place the snapshot under `dir` with the default file name.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SNAPSHOT_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotStore for FileStore {
    type Error = SnapshotError;

    async fn load(&self) -> Result<Option<Vec<Note>>, Self::Error> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No snapshot on disk yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let notes: Vec<Note> =
            serde_json::from_slice(&bytes).map_err(|e| SnapshotError::Corrupt {
                reason: e.to_string(),
            })?;
        Ok(Some(notes))
    }

    async fn save(&self, notes: &[Note]) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let payload = serde_json::to_vec_pretty(notes)?;

        let tmp = self
            .path
            .with_file_name(format!(".{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, &payload).await?;
        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        tracing::debug!(
            path = %self.path.display(),
            count = notes.len(),
            "Snapshot written"
        );
        Ok(())
    }
}
