use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Opaque note identifier.
///
/// Generated once at creation time and immutable afterwards. Serialized
/// transparently as its string form.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: String) -> Option<Self> {
        if id.is_empty() { None } else { Some(Self(id)) }
    }

    /// Mint a fresh identifier (UUID v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for NoteId {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string()).ok_or_else(|| anyhow::anyhow!("Invalid note id"))
    }
}

/// One user document.
///
/// The serialized form is camelCase with ISO-8601 timestamps
/// (`id, title, content, tags, category, createdAt, updatedAt`); this is
/// the shape the snapshot file stores, so it must stay stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Build a new note with a fresh id and both timestamps set to now.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: NoteId::generate(),
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            category: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }
}

/// Current global style state.
///
/// Styles are cosmetic and not bound to text ranges; there is one
/// `StyleValue` per session, not one per note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StyleValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl StyleValue {
    /// The style a fresh session starts with.
    pub fn document_default() -> Self {
        Self {
            font_family: Some("PT Sans, sans-serif".to_string()),
            font_size: Some("16px".to_string()),
            font_weight: Some("400".to_string()),
            color: Some("#000000".to_string()),
        }
    }

    /// Apply a partial patch; unset fields keep their previous value.
    pub fn merge(&mut self, patch: &StyleValue) {
        if let Some(v) = &patch.font_family {
            self.font_family = Some(v.clone());
        }
        if let Some(v) = &patch.font_size {
            self.font_size = Some(v.clone());
        }
        if let Some(v) = &patch.font_weight {
            self.font_weight = Some(v.clone());
        }
        if let Some(v) = &patch.color {
            self.color = Some(v.clone());
        }
    }

    /// Apply an accepted style suggestion; empty fields keep their previous
    /// value.
    pub fn apply_suggestion(&mut self, suggestion: &StyleSuggestion) {
        if !suggestion.font_family.is_empty() {
            self.font_family = Some(suggestion.font_family.clone());
        }
        if !suggestion.font_size.is_empty() {
            self.font_size = Some(suggestion.font_size.clone());
        }
        if !suggestion.font_weight.is_empty() {
            self.font_weight = Some(suggestion.font_weight.clone());
        }
        if !suggestion.color.is_empty() {
            self.color = Some(suggestion.color.clone());
        }
    }
}

/// One styling proposal from the suggestion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSuggestion {
    pub font_family: String,
    pub font_size: String,
    pub font_weight: String,
    pub color: String,
    /// Why the service proposes this styling (emphasis, visual appeal, ...).
    pub emphasis: String,
}

/// Export targets offered by the shell. Selecting one raises a notification
/// only; no file is produced.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Docx,
    #[serde(rename = "md")]
    #[strum(serialize = "md")]
    Markdown,
}
