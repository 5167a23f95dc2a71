use async_trait::async_trait;

use crate::types::{Note, StyleSuggestion};

/// Persistence seam for the note collection.
///
/// The whole collection is one snapshot: `save` replaces everything that
/// `load` will return later. Backends are free to store the snapshot
/// however they like as long as a `save` followed by a `load` round-trips.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    type Error;

    /// Returns `Ok(None)` when no snapshot has ever been written.
    async fn load(&self) -> Result<Option<Vec<Note>>, Self::Error>;

    /// Atomically replace the stored snapshot with `notes`.
    async fn save(&self, notes: &[Note]) -> Result<(), Self::Error>;
}

/// Upstream AI service producing style and rewrite proposals.
#[async_trait]
pub trait SuggestionService: Send + Sync {
    type Error;

    /// One styling proposal for `text`. `context` steers variety, e.g. when
    /// several proposals for the same text are requested in parallel.
    async fn suggest_styles(
        &self,
        text: &str,
        context: Option<&str>,
    ) -> Result<StyleSuggestion, Self::Error>;

    /// Alternative phrasings for `text`, best first.
    async fn suggest_alternatives(
        &self,
        text: &str,
        context: Option<&str>,
    ) -> Result<Vec<String>, Self::Error>;
}
