use colored::Colorize;
use ts_core::Note;

/// Title shown for notes saved with an empty title.
pub const UNTITLED: &str = "Untitled Note";

pub fn display_title(title: &str) -> &str {
    if title.is_empty() { UNTITLED } else { title }
}

/// First eight characters of a note id, enough to address it uniquely.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

pub fn header(title: &str) {
    println!("{}", title.bold().underline());
}

pub fn note_row(note: &Note) {
    println!(
        "  {}  {}  {}",
        short_id(note.id.as_str()).cyan(),
        display_title(&note.title).bold(),
        note.updated_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .dimmed(),
    );
}

pub fn info(msg: &str) {
    eprintln!("{} {}", "info:".blue().bold(), msg);
}

pub fn detail(msg: &str) {
    eprintln!("      {}", msg.dimmed());
}

pub fn warn(msg: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), msg);
}

pub fn success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_falls_back_when_empty() {
        assert_eq!(display_title(""), UNTITLED);
        assert_eq!(display_title("Groceries"), "Groceries");
        // Whitespace counts as a title, same as the editor treats it.
        assert_eq!(display_title(" "), " ");
    }

    #[test]
    fn test_short_id_truncates_uuids() {
        assert_eq!(short_id("0f8fad5b-d9cb-469f-a165-70867728950e"), "0f8fad5b");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn test_note_row_does_not_panic() {
        let note = Note::new("Test", "Body");
        note_row(&note);
    }
}
