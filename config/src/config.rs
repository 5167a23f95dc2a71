//! # Configuration Structures
//!
//! Typed configuration for every TypeSet subsystem, with serde defaults so a
//! missing section or field falls back to something usable.
//!
//! ## Design Principles
//! - Sensible defaults for local use, no required fields
//! - Use `validator` for input validation
//! - Section structs own their validation rules

use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Root configuration.
///
/// ## Validation
/// All nested configurations must pass their own validation rules.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default, PartialEq)]
pub struct TypesetConfig {
    /// Snapshot storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Editing session configuration (autosave behavior)
    #[serde(default)]
    pub session: SessionConfig,

    /// AI suggestion service configuration
    #[serde(default)]
    pub suggestions: SuggestionConfig,
}

impl TypesetConfig {
    /// Runs each section's validator and returns the first failure.
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.storage.validate()?;
        self.session.validate()?;
        self.suggestions.validate()?;
        Ok(())
    }
}

/// Snapshot storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default, PartialEq)]
pub struct StorageConfig {
    /// Directory holding the notes snapshot file. When unset, the platform
    /// data directory is used.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub data_dir: Option<String>,
}

/// Editing session configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct SessionConfig {
    /// Autosave debounce window in milliseconds
    #[serde(default = "default_autosave_debounce_ms")]
    #[validate(range(min = 100, max = 10_000))]
    pub autosave_debounce_ms: u64,
}

fn default_autosave_debounce_ms() -> u64 {
    1200
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            autosave_debounce_ms: default_autosave_debounce_ms(),
        }
    }
}

impl SessionConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.autosave_debounce_ms)
    }
}

/// AI suggestion service configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct SuggestionConfig {
    /// Suggestion service base URL
    #[serde(default = "default_suggest_base_url")]
    #[validate(custom(function = "validate_base_url"))]
    pub base_url: String,

    /// Bearer token sent on suggestion requests
    #[serde(default)]
    pub api_key: Option<String>,

    /// Style variants fetched per fan-out request
    #[serde(default = "default_style_variants")]
    #[validate(range(min = 1, max = 10))]
    pub style_variants: usize,

    /// Upper bound on rewrite alternatives shown, at most 3
    #[serde(default = "default_max_alternatives")]
    #[validate(range(min = 1, max = 3))]
    pub max_alternatives: usize,

    /// Request timeout in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    #[validate(range(min = 500, max = 120_000))]
    pub request_timeout_ms: u64,

    /// Serve canned suggestions instead of calling the service
    #[serde(default)]
    pub offline: bool,
}

fn default_suggest_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_style_variants() -> usize {
    3
}

fn default_max_alternatives() -> usize {
    3
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            base_url: default_suggest_base_url(),
            api_key: None,
            style_variants: default_style_variants(),
            max_alternatives: default_max_alternatives(),
            request_timeout_ms: default_request_timeout_ms(),
            offline: false,
        }
    }
}

impl SuggestionConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn validate_base_url(value: &str) -> Result<(), validator::ValidationError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_base_url"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = TypesetConfig::default();
        assert!(config.storage.data_dir.is_none());
        assert_eq!(config.session.autosave_debounce_ms, 1200);
        assert_eq!(config.suggestions.base_url, "http://localhost:8080");
        assert_eq!(config.suggestions.style_variants, 3);
        assert_eq!(config.suggestions.max_alternatives, 3);
        assert!(!config.suggestions.offline);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = TypesetConfig::default();
        assert!(config.validate_all().is_ok());
    }

    #[test]
    fn test_session_config_validation() {
        let mut session = SessionConfig::default();
        session.autosave_debounce_ms = 50;
        assert!(session.validate().is_err());

        session.autosave_debounce_ms = 20_000;
        assert!(session.validate().is_err());
    }

    #[test]
    fn test_session_debounce_helper() {
        let session = SessionConfig::default();
        assert_eq!(session.debounce(), Duration::from_millis(1200));
    }

    #[test]
    fn test_storage_config_validation() {
        let mut storage = StorageConfig::default();
        storage.data_dir = Some(String::new());
        assert!(storage.validate().is_err());

        storage.data_dir = Some("/var/lib/typeset".to_string());
        assert!(storage.validate().is_ok());
    }

    #[test]
    fn test_suggestion_config_validation() {
        let mut suggestions = SuggestionConfig::default();
        suggestions.style_variants = 0;
        assert!(suggestions.validate().is_err());

        suggestions = SuggestionConfig::default();
        suggestions.base_url = "ftp://example.com".to_string();
        assert!(suggestions.validate().is_err());

        suggestions.base_url = "https://suggest.example.com".to_string();
        assert!(suggestions.validate().is_ok());
    }

    #[test]
    fn test_validate_all_surfaces_section_errors() {
        let mut config = TypesetConfig::default();
        config.session.autosave_debounce_ms = 1;
        assert!(config.validate_all().is_err());
    }
}
