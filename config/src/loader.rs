//! # Environment Variable Loading
//!
//! Builds a [`TypesetConfig`] from `TYPESET_*` environment variables,
//! falling back to defaults for anything unset.

use std::env;

use crate::config::{SessionConfig, StorageConfig, SuggestionConfig, TypesetConfig};

/// Load configuration from environment variables.
///
/// Unset variables fall back to the section defaults. Validation is left to
/// the caller so that file- and env-sourced configs go through the same
/// checks.
pub fn load_from_env() -> Result<TypesetConfig, Box<dyn std::error::Error>> {
    let config = TypesetConfig {
        storage: load_storage_from_env()?,
        session: load_session_from_env()?,
        suggestions: load_suggestions_from_env()?,
    };

    Ok(config)
}

fn load_storage_from_env() -> Result<StorageConfig, Box<dyn std::error::Error>> {
    Ok(StorageConfig {
        data_dir: env::var("TYPESET_DATA_DIR").ok(),
    })
}

fn load_session_from_env() -> Result<SessionConfig, Box<dyn std::error::Error>> {
    Ok(SessionConfig {
        autosave_debounce_ms: parse_env("TYPESET_AUTOSAVE_DEBOUNCE_MS").unwrap_or(1200),
    })
}

fn load_suggestions_from_env() -> Result<SuggestionConfig, Box<dyn std::error::Error>> {
    Ok(SuggestionConfig {
        base_url: env::var("TYPESET_SUGGEST_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        api_key: env::var("TYPESET_SUGGEST_API_KEY").ok(),
        style_variants: parse_env("TYPESET_SUGGEST_STYLE_VARIANTS").unwrap_or(3),
        max_alternatives: parse_env("TYPESET_SUGGEST_MAX_ALTERNATIVES").unwrap_or(3),
        request_timeout_ms: parse_env("TYPESET_SUGGEST_TIMEOUT_MS").unwrap_or(10_000),
        offline: parse_env("TYPESET_SUGGEST_OFFLINE").unwrap_or(false),
    })
}

fn parse_env<T>(key: &str) -> Result<T, Box<dyn std::error::Error>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(s) => s
            .parse::<T>()
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error>),
        Err(e) => Err(Box::new(e) as Box<dyn std::error::Error>),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "TYPESET_DATA_DIR",
        "TYPESET_AUTOSAVE_DEBOUNCE_MS",
        "TYPESET_SUGGEST_BASE_URL",
        "TYPESET_SUGGEST_API_KEY",
        "TYPESET_SUGGEST_STYLE_VARIANTS",
        "TYPESET_SUGGEST_MAX_ALTERNATIVES",
        "TYPESET_SUGGEST_TIMEOUT_MS",
        "TYPESET_SUGGEST_OFFLINE",
    ];

    fn clear_env() {
        for var in VARS {
            unsafe {
                env::remove_var(var);
            }
        }
    }

    #[test]
    #[serial]
    fn test_load_from_env_defaults() {
        clear_env();

        let config = load_from_env().unwrap();
        assert!(config.storage.data_dir.is_none());
        assert_eq!(config.session.autosave_debounce_ms, 1200);
        assert_eq!(config.suggestions.base_url, "http://localhost:8080");
        assert!(config.suggestions.api_key.is_none());
        assert_eq!(config.suggestions.style_variants, 3);
        assert!(!config.suggestions.offline);
    }

    #[test]
    #[serial]
    fn test_load_from_env_overrides() {
        clear_env();
        unsafe {
            env::set_var("TYPESET_DATA_DIR", "/tmp/typeset-test");
            env::set_var("TYPESET_AUTOSAVE_DEBOUNCE_MS", "800");
            env::set_var("TYPESET_SUGGEST_BASE_URL", "https://suggest.example.com");
            env::set_var("TYPESET_SUGGEST_API_KEY", "test-key");
            env::set_var("TYPESET_SUGGEST_STYLE_VARIANTS", "5");
            env::set_var("TYPESET_SUGGEST_OFFLINE", "true");
        }

        let config = load_from_env().unwrap();
        assert_eq!(config.storage.data_dir.as_deref(), Some("/tmp/typeset-test"));
        assert_eq!(config.session.autosave_debounce_ms, 800);
        assert_eq!(config.suggestions.base_url, "https://suggest.example.com");
        assert_eq!(config.suggestions.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.suggestions.style_variants, 5);
        assert!(config.suggestions.offline);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_malformed_numeric_falls_back_to_default() {
        clear_env();
        unsafe {
            env::set_var("TYPESET_AUTOSAVE_DEBOUNCE_MS", "not-a-number");
        }

        let config = load_from_env().unwrap();
        assert_eq!(config.session.autosave_debounce_ms, 1200);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_loaded_config_passes_validation() {
        clear_env();
        unsafe {
            env::set_var("TYPESET_AUTOSAVE_DEBOUNCE_MS", "1500");
        }

        let config = load_from_env().unwrap();
        assert!(config.validate_all().is_ok());

        clear_env();
    }
}
