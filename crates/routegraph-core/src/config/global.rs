//! User-level configuration lookup (`~/.config/routegraph/config.toml`)

use std::path::{Path, PathBuf};

use tracing::debug;

use super::TraversalConfig;
use crate::error::{Result, RouteError};

const CONFIG_DIR: &str = "routegraph";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ROUTEGRAPH_CONFIG_DIR";

/// Location of the user-level config file
pub fn config_path() -> Result<PathBuf> {
    // Allow environment variable override for testing
    let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        PathBuf::from(env_dir)
    } else {
        dirs::config_dir()
            .ok_or_else(|| RouteError::Other("unable to determine config directory".to_string()))?
            .join(CONFIG_DIR)
    };

    Ok(config_dir.join(CONFIG_FILE))
}

/// Resolve the effective configuration.
///
/// An explicit path must exist. Otherwise the user-level file is read when
/// present, and defaults apply when it is not.
pub fn resolve(explicit: Option<&Path>) -> Result<TraversalConfig> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading explicit config");
        return TraversalConfig::load(path);
    }

    let path = match config_path() {
        Ok(path) => path,
        Err(e) => {
            debug!(error = %e, "no config directory, using defaults");
            return Ok(TraversalConfig::default());
        }
    };

    if !path.exists() {
        return Ok(TraversalConfig::default());
    }

    debug!(path = %path.display(), "loading user config");
    TraversalConfig::load(&path)
}

/// Returns the source description for display purposes
pub fn source_display() -> String {
    if std::env::var(CONFIG_DIR_ENV_VAR).is_ok() {
        "custom config directory".to_string()
    } else {
        "~/.config/routegraph/config.toml".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(resolve(Some(&missing)), Err(RouteError::Io(_))));
    }

    #[test]
    fn test_explicit_path_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "max_odd_nodes = 4\n").unwrap();

        let config = resolve(Some(&path)).unwrap();
        assert_eq!(config.max_odd_nodes, 4);
    }
}
