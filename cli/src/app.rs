//! Process bootstrap: configuration, storage selection, session wiring.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use config::{TypesetConfig, load_from_env, load_from_file};
use notes::NoteRepository;
use session::NoteSession;
use ts_core::SnapshotStore;

/// Resolve configuration. An explicit file wins over environment variables.
pub fn load_config(config_path: Option<&Path>) -> Result<TypesetConfig> {
    let config = match config_path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => load_from_env()
            .map_err(|e| anyhow::anyhow!("failed to load config from environment: {e}"))?,
    };

    config.validate_all().context("invalid configuration")?;
    Ok(config)
}

/// Pick the directory holding the snapshot file.
pub fn resolve_data_dir(cli_dir: Option<&Path>, config: &TypesetConfig) -> Result<PathBuf> {
    if let Some(dir) = cli_dir {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = &config.storage.data_dir {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::data_dir().context("no platform data directory available")?;
    Ok(base.join("typeset"))
}

/// Build the repository over `store`, seed it on first run, and wrap it in
/// an editing session using the configured autosave debounce.
pub async fn open_session<S>(store: S, config: &TypesetConfig) -> Result<NoteSession<S>>
where
    S: SnapshotStore + 'static,
    S::Error: std::error::Error + Send + Sync + 'static,
{
    let repo = Arc::new(NoteRepository::new(Arc::new(store)));
    if repo.initialize().await? {
        tracing::debug!("starter notes seeded");
    }

    Ok(NoteSession::with_debounce(repo, config.session.debounce()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_precedence() {
        let mut config = TypesetConfig::default();
        config.storage.data_dir = Some("/from/config".to_string());

        let cli_dir = Path::new("/from/cli");
        assert_eq!(
            resolve_data_dir(Some(cli_dir), &config).unwrap(),
            PathBuf::from("/from/cli")
        );
        assert_eq!(
            resolve_data_dir(None, &config).unwrap(),
            PathBuf::from("/from/config")
        );
    }
}
