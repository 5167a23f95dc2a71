use std::sync::Arc;

use async_trait::async_trait;
use notes::{CommitOutcome, NoteRepository, RepositoryError};
use storage::MemoryStore;
use ts_core::traits::SnapshotStore;
use ts_core::types::{Note, NoteId};

#[tokio::test]
async fn test_initialize_seeds_empty_store() {
    let store = Arc::new(MemoryStore::new());
    let repo = NoteRepository::new(store.clone());

    let seeded = repo.initialize().await.unwrap();
    assert!(seeded);

    let notes = repo.list().await;
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].title, "Welcome to TypeSet!");
    assert_eq!(notes[1].title, "Brainstorming Ideas");

    // Seeds are persisted immediately so a crash before the first edit
    // still leaves a snapshot behind.
    assert_eq!(store.save_count(), 1);
}

#[tokio::test]
async fn test_initialize_prefers_existing_snapshot() {
    let existing = vec![Note::new("Mine", "Already here")];
    let store = Arc::new(MemoryStore::with_snapshot(existing));
    let repo = NoteRepository::new(store.clone());

    let seeded = repo.initialize().await.unwrap();
    assert!(!seeded);
    assert_eq!(store.save_count(), 0);

    let notes = repo.list().await;
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Mine");
}

#[tokio::test]
async fn test_initialize_reseeds_after_load_failure() {
    struct BrokenLoad;

    #[async_trait]
    impl SnapshotStore for BrokenLoad {
        type Error = std::io::Error;

        async fn load(&self) -> Result<Option<Vec<Note>>, Self::Error> {
            Err(std::io::Error::other("snapshot unreadable"))
        }

        async fn save(&self, _notes: &[Note]) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    let repo = NoteRepository::new(Arc::new(BrokenLoad));
    let seeded = repo.initialize().await.unwrap();
    assert!(seeded);
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn test_create_prepends_and_persists() {
    let store = Arc::new(MemoryStore::new());
    let repo = NoteRepository::new(store.clone());
    repo.initialize().await.unwrap();

    let note = repo.create("Untitled Note", "").await.unwrap();

    let notes = repo.list().await;
    assert_eq!(notes.len(), 3);
    assert_eq!(notes[0].id, note.id);
    assert_eq!(store.save_count(), 2);

    let persisted = store.load().await.unwrap().unwrap();
    assert_eq!(persisted[0].id, note.id);
}

#[tokio::test]
async fn test_commit_updates_fields_and_timestamp() {
    let store = Arc::new(MemoryStore::new());
    let repo = NoteRepository::new(store.clone());
    repo.initialize().await.unwrap();

    let original = repo.list().await[0].clone();
    let outcome = repo
        .commit(&original.id, "Hello", "Fresh content")
        .await
        .unwrap();

    let CommitOutcome::Saved(updated) = outcome else {
        panic!("expected a saved outcome");
    };
    assert_eq!(updated.title, "Hello");
    assert_eq!(updated.content, "Fresh content");
    assert!(updated.updated_at >= original.updated_at);
    assert_eq!(updated.created_at, original.created_at);

    let fetched = repo.get(&original.id).await.unwrap();
    assert_eq!(fetched.title, "Hello");
}

#[tokio::test]
async fn test_commit_without_changes_skips_persistence() {
    let store = Arc::new(MemoryStore::new());
    let repo = NoteRepository::new(store.clone());
    repo.initialize().await.unwrap();
    let saves_after_init = store.save_count();

    let note = repo.list().await[0].clone();
    let outcome = repo.commit(&note.id, &note.title, &note.content).await.unwrap();

    assert_eq!(outcome, CommitOutcome::Unchanged);
    assert_eq!(store.save_count(), saves_after_init);
}

#[tokio::test]
async fn test_commit_unknown_note_errors() {
    let repo = NoteRepository::new(Arc::new(MemoryStore::new()));
    repo.initialize().await.unwrap();

    let ghost = NoteId::generate();
    let err = repo.commit(&ghost, "T", "C").await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_removes_and_returns_the_note() {
    let store = Arc::new(MemoryStore::new());
    let repo = NoteRepository::new(store.clone());
    repo.initialize().await.unwrap();

    let victim = repo.list().await[1].clone();
    let removed = repo.delete(&victim.id).await.unwrap();

    assert_eq!(removed.id, victim.id);
    assert_eq!(repo.len().await, 1);
    assert!(repo.get(&victim.id).await.is_none());

    let persisted = store.load().await.unwrap().unwrap();
    assert_eq!(persisted.len(), 1);
}

#[tokio::test]
async fn test_delete_unknown_note_errors() {
    let repo = NoteRepository::new(Arc::new(MemoryStore::new()));
    repo.initialize().await.unwrap();

    let err = repo.delete(&NoteId::generate()).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_search_matches_title_and_content_case_insensitively() {
    let repo = NoteRepository::new(Arc::new(MemoryStore::new()));
    repo.initialize().await.unwrap();
    repo.create("Groceries", "Milk, eggs, BREAD").await.unwrap();

    let by_title = repo.search("groceries").await;
    assert_eq!(by_title.len(), 1);

    let by_content = repo.search("bread").await;
    assert_eq!(by_content.len(), 1);

    let campaign = repo.search("marketing CAMPAIGN").await;
    assert_eq!(campaign.len(), 1);
    assert_eq!(campaign[0].title, "Brainstorming Ideas");

    assert!(repo.search("no such text anywhere").await.is_empty());
}
