use std::sync::Arc;

use notes::NoteRepository;
use session::{NoteSession, SessionEvent};
use storage::MemoryStore;
use ts_core::ExportFormat;

async fn seeded_session() -> NoteSession<MemoryStore> {
    let repo = Arc::new(NoteRepository::new(Arc::new(MemoryStore::new())));
    repo.initialize().await.expect("initialize should succeed");
    NoteSession::new(repo)
}

#[tokio::test]
async fn fresh_store_seeds_then_create_edit_switch_and_delete() {
    let session = seeded_session().await;
    let repo = Arc::clone(session.repository());

    // Two starter notes on first run.
    let notes = repo.list().await;
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].title, "Welcome to TypeSet!");
    assert_eq!(notes[1].title, "Brainstorming Ideas");

    // A created note lands first and becomes active, with empty fields.
    let created = session.create_and_select().await.expect("create");
    let notes = repo.list().await;
    assert_eq!(notes.len(), 3);
    assert_eq!(notes[0].id, created.id);
    assert_eq!(created.title, "");
    assert_eq!(session.active_id().await, Some(created.id.clone()));

    // Buffered edits persist on switch-away without an explicit save.
    session.edit_title("Hi").await.expect("edit");
    let other = notes[1].id.clone();
    session.select_note(&other).await.expect("select");
    let persisted = repo.get(&created.id).await.expect("note kept");
    assert_eq!(persisted.title, "Hi");

    // Deleting every note leaves an empty list and no selection.
    for note in repo.list().await {
        session.delete_note(&note.id).await.expect("delete");
    }
    assert!(repo.is_empty().await);
    assert_eq!(session.active_id().await, None);
    assert!(session.buffer().await.is_none());
}

#[tokio::test]
async fn session_events_trace_the_editing_flow() {
    let session = seeded_session().await;
    let mut events = session.subscribe();

    session.create_and_select().await.expect("create");
    assert!(matches!(
        events.try_recv(),
        Ok(SessionEvent::NoteCreated { .. })
    ));
    assert!(matches!(
        events.try_recv(),
        Ok(SessionEvent::SelectionChanged { id: Some(_) })
    ));

    session.edit_content("draft").await.expect("edit");
    session.flush().await.expect("flush");
    assert!(matches!(
        events.try_recv(),
        Ok(SessionEvent::NoteSaved { .. })
    ));

    session.request_export(ExportFormat::Pdf);
    assert!(matches!(
        events.try_recv(),
        Ok(SessionEvent::ExportRequested {
            format: ExportFormat::Pdf
        })
    ));
}

#[tokio::test]
async fn deleting_the_active_note_promotes_the_next_one() {
    let session = seeded_session().await;
    let repo = Arc::clone(session.repository());

    let first = session.select_first().await.expect("select").expect("seeded");
    session.delete_note(&first.id).await.expect("delete");

    let remaining = repo.list().await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(session.active_id().await, Some(remaining[0].id.clone()));
}
