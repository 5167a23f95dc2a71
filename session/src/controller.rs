use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use notes::{CommitOutcome, NoteRepository};
use tokio::sync::{RwLock, broadcast};
use ts_core::traits::SnapshotStore;
use ts_core::types::{ExportFormat, Note, NoteId, StyleSuggestion, StyleValue};

use crate::error::SessionError;
use crate::events::SessionEvent;

/// Idle window after the last edit before the buffer is committed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1200);

/// Seed handed to the suggestion panel when nothing is selected and the
/// active note has no content yet.
pub const SUGGESTION_FALLBACK_TEXT: &str = "Sample text for AI suggestions.";

/// How much of the active note stands in for an explicit selection.
const SUGGESTION_EXCERPT_CHARS: usize = 200;

/// Uncommitted editor text for the active note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorBuffer {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

impl EditorBuffer {
    fn from_note(note: &Note) -> Self {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }
}

struct SessionState {
    active: Option<EditorBuffer>,
    selection: Option<String>,
    styles: StyleValue,
}

impl SessionState {
    fn new() -> Self {
        Self {
            active: None,
            selection: None,
            styles: StyleValue::document_default(),
        }
    }
}

/// State machine over the single active note.
///
/// Holds the editing buffer apart from the committed collection and flushes
/// it back through [`NoteRepository::commit`] when the user navigates away:
/// switching notes, creating, deleting another note, focus loss, teardown,
/// and a trailing-edge debounce after the last edit.
///
/// Cloning is cheap; clones share all state. The debounce timer is a spawned
/// task guarded by a generation counter: every edit, flush, or switch bumps
/// the counter, and a timer only commits if its generation is still current.
pub struct NoteSession<S: SnapshotStore> {
    repo: Arc<NoteRepository<S>>,
    state: Arc<RwLock<SessionState>>,
    autosave_generation: Arc<AtomicU64>,
    debounce: Duration,
    events: broadcast::Sender<SessionEvent>,
}

impl<S: SnapshotStore> Clone for NoteSession<S> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            state: Arc::clone(&self.state),
            autosave_generation: Arc::clone(&self.autosave_generation),
            debounce: self.debounce,
            events: self.events.clone(),
        }
    }
}

impl<S: SnapshotStore + 'static> NoteSession<S>
where
    S::Error: std::error::Error + Send + Sync + 'static,
{
    pub fn new(repo: Arc<NoteRepository<S>>) -> Self {
        Self::with_debounce(repo, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(repo: Arc<NoteRepository<S>>, debounce: Duration) -> Self {
        let (events, _) = broadcast::channel(256);
        Self {
            repo,
            state: Arc::new(RwLock::new(SessionState::new())),
            autosave_generation: Arc::new(AtomicU64::new(0)),
            debounce,
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub fn repository(&self) -> &Arc<NoteRepository<S>> {
        &self.repo
    }

    /// Select the first note in collection order, if any. Called once after
    /// the repository has been initialized.
    pub async fn select_first(&self) -> Result<Option<Note>, SessionError> {
        match self.repo.list().await.into_iter().next() {
            Some(note) => Ok(Some(self.select_note(&note.id).await?)),
            None => Ok(None),
        }
    }

    /// Make `id` the active note, flushing the previous buffer first.
    ///
    /// The flush is issued before the new buffer is populated, so edits for
    /// one note can never bleed into another. Selecting the already-active
    /// note is a no-op and does not flush.
    pub async fn select_note(&self, id: &NoteId) -> Result<Note, SessionError> {
        let mut state = self.state.write().await;

        if state.active.as_ref().is_some_and(|b| b.id == *id) {
            return self
                .repo
                .get(id)
                .await
                .ok_or_else(|| SessionError::UnknownNote { id: id.clone() });
        }

        let note = self
            .repo
            .get(id)
            .await
            .ok_or_else(|| SessionError::UnknownNote { id: id.clone() })?;

        self.cancel_autosave();
        self.flush_buffer(&state).await?;

        state.active = Some(EditorBuffer::from_note(&note));
        let _ = self.events.send(SessionEvent::SelectionChanged {
            id: Some(note.id.clone()),
        });
        Ok(note)
    }

    /// Create a blank note, make it active, and return it.
    pub async fn create_and_select(&self) -> Result<Note, SessionError> {
        let mut state = self.state.write().await;

        self.cancel_autosave();
        self.flush_buffer(&state).await?;

        let note = self.repo.create("", "").await?;
        state.active = Some(EditorBuffer::from_note(&note));

        let _ = self.events.send(SessionEvent::NoteCreated {
            id: note.id.clone(),
            title: note.title.clone(),
        });
        let _ = self.events.send(SessionEvent::SelectionChanged {
            id: Some(note.id.clone()),
        });
        Ok(note)
    }

    /// Remove a note, re-deriving the active selection when it was the one
    /// removed: the first remaining note becomes active, or the session
    /// drops to no selection.
    ///
    /// Deleting the active note discards its buffered edits along with it.
    /// Deleting any other note flushes the active buffer first, keeping the
    /// never-lose-edits-on-navigation guarantee.
    pub async fn delete_note(&self, id: &NoteId) -> Result<Note, SessionError> {
        let mut state = self.state.write().await;
        let deleting_active = state.active.as_ref().is_some_and(|b| b.id == *id);

        self.cancel_autosave();
        if !deleting_active {
            self.flush_buffer(&state).await?;
        }

        let removed = self.repo.delete(id).await?;

        if deleting_active {
            let next = self.repo.list().await.into_iter().next();
            state.active = next.as_ref().map(EditorBuffer::from_note);
            let _ = self.events.send(SessionEvent::SelectionChanged {
                id: state.active.as_ref().map(|b| b.id.clone()),
            });
        }

        let _ = self.events.send(SessionEvent::NoteDeleted {
            id: removed.id.clone(),
            title: removed.title.clone(),
        });
        Ok(removed)
    }

    /// Buffer a title edit and reset the auto-save window.
    pub async fn edit_title(&self, text: impl Into<String>) -> Result<(), SessionError> {
        {
            let mut state = self.state.write().await;
            let Some(buffer) = state.active.as_mut() else {
                return Err(SessionError::NoActiveNote);
            };
            buffer.title = text.into();
        }
        self.schedule_autosave();
        Ok(())
    }

    /// Buffer a content edit and reset the auto-save window.
    pub async fn edit_content(&self, text: impl Into<String>) -> Result<(), SessionError> {
        {
            let mut state = self.state.write().await;
            let Some(buffer) = state.active.as_mut() else {
                return Err(SessionError::NoActiveNote);
            };
            buffer.content = text.into();
        }
        self.schedule_autosave();
        Ok(())
    }

    /// Commit the buffer if it differs from the stored note. Returns whether
    /// a write happened. Safe to call at any time; a session with no active
    /// note does nothing.
    pub async fn flush(&self) -> Result<bool, SessionError> {
        self.cancel_autosave();
        let state = self.state.write().await;
        self.flush_buffer(&state).await
    }

    /// Host shells call this when the editor loses input focus.
    pub async fn on_focus_lost(&self) -> Result<bool, SessionError> {
        self.flush().await
    }

    /// Last chance to commit before the process goes away. Also retires any
    /// pending auto-save timer.
    pub async fn on_before_teardown(&self) -> Result<bool, SessionError> {
        self.flush().await
    }

    pub async fn active_id(&self) -> Option<NoteId> {
        self.state.read().await.active.as_ref().map(|b| b.id.clone())
    }

    pub async fn buffer(&self) -> Option<EditorBuffer> {
        self.state.read().await.active.clone()
    }

    /// Whether the buffer differs from the committed note.
    pub async fn is_dirty(&self) -> bool {
        let state = self.state.read().await;
        let Some(buffer) = &state.active else {
            return false;
        };
        match self.repo.get(&buffer.id).await {
            Some(stored) => stored.title != buffer.title || stored.content != buffer.content,
            None => false,
        }
    }

    /// Remember the text the user highlighted for the suggestion panel.
    pub async fn set_selection(&self, text: impl Into<String>) {
        let text = text.into();
        let mut state = self.state.write().await;
        state.selection = if text.is_empty() { None } else { Some(text) };
    }

    pub async fn clear_selection(&self) {
        self.state.write().await.selection = None;
    }

    pub async fn selection(&self) -> Option<String> {
        self.state.read().await.selection.clone()
    }

    /// Text the suggestion panel should work with: the explicit selection
    /// when present, otherwise an excerpt of the active note's stored
    /// content. The derived excerpt is remembered as the selection so an
    /// accepted rewrite knows what to replace.
    pub async fn suggestion_seed(&self) -> Result<String, SessionError> {
        let mut state = self.state.write().await;
        if let Some(selection) = &state.selection {
            return Ok(selection.clone());
        }

        let Some(buffer) = &state.active else {
            return Err(SessionError::NoActiveNote);
        };

        let content = self
            .repo
            .get(&buffer.id)
            .await
            .map(|n| n.content)
            .unwrap_or_default();
        let excerpt: String = content.chars().take(SUGGESTION_EXCERPT_CHARS).collect();
        let seed = if excerpt.is_empty() {
            SUGGESTION_FALLBACK_TEXT.to_string()
        } else {
            excerpt
        };

        state.selection = Some(seed.clone());
        Ok(seed)
    }

    /// Fold an accepted style proposal into the session styles. Empty fields
    /// in the proposal keep their current value.
    pub async fn apply_style_suggestion(&self, suggestion: &StyleSuggestion) {
        let mut state = self.state.write().await;
        state.styles.apply_suggestion(suggestion);
        let _ = self.events.send(SessionEvent::StyleApplied {
            emphasis: suggestion.emphasis.clone(),
        });
    }

    /// Replace the remembered selection inside the buffer with `suggested`,
    /// or the whole content when the selection no longer matches. Clears the
    /// selection and restarts the auto-save window.
    pub async fn apply_text_suggestion(&self, suggested: &str) -> Result<(), SessionError> {
        let rewritten = {
            let mut state = self.state.write().await;
            let selection = state.selection.take();
            let Some(buffer) = state.active.as_mut() else {
                state.selection = selection;
                return Err(SessionError::NoActiveNote);
            };

            match selection {
                Some(sel) if buffer.content.contains(sel.as_str()) => {
                    buffer.content = buffer.content.replacen(sel.as_str(), suggested, 1);
                }
                _ => buffer.content = suggested.to_string(),
            }
            buffer.id.clone()
        };

        let _ = self
            .events
            .send(SessionEvent::ContentRewritten { id: rewritten });
        self.schedule_autosave();
        Ok(())
    }

    /// Merge a partial style change into the session styles.
    pub async fn set_style(&self, patch: &StyleValue) {
        let mut state = self.state.write().await;
        state.styles.merge(patch);
    }

    pub async fn current_style(&self) -> StyleValue {
        self.state.read().await.styles.clone()
    }

    /// Export produces no file; the session only announces the request so
    /// the shell can tell the user.
    pub fn request_export(&self, format: ExportFormat) {
        let _ = self
            .events
            .send(SessionEvent::ExportRequested { format });
    }

    async fn flush_buffer(&self, state: &SessionState) -> Result<bool, SessionError> {
        let Some(buffer) = &state.active else {
            return Ok(false);
        };

        match self
            .repo
            .commit(&buffer.id, &buffer.title, &buffer.content)
            .await?
        {
            CommitOutcome::Saved(note) => {
                let _ = self.events.send(SessionEvent::NoteSaved {
                    id: note.id.clone(),
                    title: note.title,
                });
                Ok(true)
            }
            CommitOutcome::Unchanged => Ok(false),
        }
    }

    fn cancel_autosave(&self) {
        self.autosave_generation.fetch_add(1, Ordering::SeqCst);
    }

    fn schedule_autosave(&self) {
        let generation = self.autosave_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let session = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(session.debounce).await;
            // A newer edit or an explicit flush has superseded this timer.
            if session.autosave_generation.load(Ordering::SeqCst) != generation {
                return;
            }
            if let Err(e) = session.flush().await {
                tracing::warn!(error = %e, "Debounced auto-save failed");
            }
        });
    }
}
