use chrono::{Duration, Utc};
use ts_core::types::Note;

/// The two notes a fresh install starts with.
///
/// Seeded whenever no usable snapshot exists, so a first launch never shows
/// an empty workspace.
pub fn starter_notes() -> Vec<Note> {
    let now = Utc::now();
    let yesterday = now - Duration::days(1);

    vec![
        Note::new(
            "Welcome to TypeSet!",
            "This is your first note. Feel free to edit it or create a new one.\n\nTypeSet helps you write beautifully with powerful styling options and AI assistance. Try selecting some text and clicking 'AI Styles'!",
        )
        .with_tags(vec!["welcome".to_string(), "getting started".to_string()])
        .with_category("General"),
        Note::new(
            "Brainstorming Ideas",
            "1. New project structure\n2. Marketing campaign for Q3\n3. Feature enhancements for the app",
        )
        .with_tags(vec!["work".to_string(), "project".to_string()])
        .with_category("Productivity")
        .with_timestamps(yesterday, yesterday),
    ]
}
