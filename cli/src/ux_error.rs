use colored::Colorize;

/// Terminal-friendly error with actionable fixes.
#[derive(Debug)]
pub struct UxError {
    pub what: String,
    pub why: Option<String>,
    pub how_to_fix: Vec<String>,
    pub suggested_command: Option<String>,
}

impl UxError {
    pub fn new(what: impl Into<String>) -> Self {
        Self {
            what: what.into(),
            why: None,
            how_to_fix: Vec::new(),
            suggested_command: None,
        }
    }

    pub fn why(mut self, reason: impl Into<String>) -> Self {
        self.why = Some(reason.into());
        self
    }

    pub fn fix(mut self, suggestion: impl Into<String>) -> Self {
        self.how_to_fix.push(suggestion.into());
        self
    }

    pub fn suggest(mut self, cmd: impl Into<String>) -> Self {
        self.suggested_command = Some(cmd.into());
        self
    }

    pub fn display(&self) {
        eprintln!();
        eprintln!("{} {}", "error:".red().bold(), self.what.white().bold());

        if let Some(why) = &self.why {
            eprintln!("       {}", why.dimmed());
        }

        if !self.how_to_fix.is_empty() {
            eprintln!();
            eprintln!("{}", "How to fix:".yellow().bold());
            for (i, fix) in self.how_to_fix.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, fix);
            }
        }

        if let Some(cmd) = &self.suggested_command {
            eprintln!();
            eprintln!("{}", "Try this:".green().bold());
            eprintln!("  $ {}", cmd.cyan());
        }
        eprintln!();
    }
}

impl std::fmt::Display for UxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.what)
    }
}

impl std::error::Error for UxError {}

pub fn note_not_found(input: &str) -> UxError {
    UxError::new(format!("No note matches '{}'", input))
        .why("Note ids can be shortened to any unique prefix")
        .fix("List your notes to find the right id")
        .suggest("typeset list")
}

pub fn ambiguous_prefix(prefix: &str, count: usize) -> UxError {
    UxError::new(format!(
        "Note id prefix '{}' is ambiguous ({} matches)",
        prefix, count
    ))
    .fix("Add more characters to the prefix")
    .suggest("typeset list")
}

pub fn no_notes() -> UxError {
    UxError::new("You have no notes yet")
        .fix("Create your first note")
        .suggest("typeset new --title 'My first note'")
}

pub fn invalid_export_format(input: &str) -> UxError {
    UxError::new(format!("Unknown export format: '{}'", input))
        .why("Valid formats are: pdf, docx, md")
        .fix("Use one of the valid format names")
        .suggest("typeset export --format pdf")
}

pub fn suggestion_service_unreachable(url: &str, detail: &str) -> UxError {
    UxError::new("Cannot reach the suggestion service")
        .why(format!("{} did not answer: {}", url, detail))
        .fix("Check that the suggestion service is running")
        .fix("Point TYPESET_SUGGEST_BASE_URL at the right host")
        .fix("Or run offline with canned suggestions")
        .suggest("TYPESET_SUGGEST_OFFLINE=true typeset suggest styles")
}

pub fn invalid_variant(requested: usize, available: usize) -> UxError {
    UxError::new(format!("No suggestion number {}", requested))
        .why(format!(
            "Suggestions are numbered 1 to {}",
            available
        ))
        .fix("Pick one of the listed numbers")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accumulates_fixes() {
        let err = UxError::new("boom").fix("first").fix("second").suggest("typeset list");
        assert_eq!(err.how_to_fix.len(), 2);
        assert_eq!(err.suggested_command.as_deref(), Some("typeset list"));
    }

    #[test]
    fn test_display_uses_the_what_line() {
        let err = note_not_found("abcd");
        assert_eq!(err.to_string(), "No note matches 'abcd'");
    }
}
