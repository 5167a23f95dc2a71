//! # Configuration System
//!
//! Centralized configuration for TypeSet.
//!
//! This crate provides:
//! - Configuration structures for storage, session, and suggestion settings
//! - Environment variable loading (12-factor app principles)
//! - Configuration file loading (TOML/YAML)
//! - Configuration validation

pub mod config;
pub mod file_loader;
pub mod loader;

pub use config::{SessionConfig, StorageConfig, SuggestionConfig, TypesetConfig};
pub use file_loader::{ConfigFileError, load_from_file, load_from_toml, load_from_yaml};
pub use loader::load_from_env;
pub use validator::Validate;
