//! JSON config file loading.
//!
//! Responsibilities:
//! - Resolve the default config file location via `directories`.
//! - Read and parse a `GlidepathConfig` from a JSON file.
//!
//! Invariants:
//! - A missing file at the *default* location is not an error (defaults apply).
//! - A missing file at an *explicit* location is `ConfigError::ConfigFileRead`.

use std::path::{Path, PathBuf};

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::GlidepathConfig;

/// Returns the default path to the configuration file.
///
/// - Linux/macOS: `~/.config/glidepath/config.json`
/// - Windows: `%AppData%\glidepath\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", "glidepath")
        .ok_or(ConfigError::ConfigDirUnavailable)?;

    Ok(proj_dirs.config_dir().join("config.json"))
}

/// Read and parse a config file.
pub(crate) fn read_config_file(path: &Path) -> Result<GlidepathConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        kind: e.kind(),
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        line: e.line(),
        column: e.column(),
    })
}

/// Apply the config file (explicit or default) to the loader.
pub(crate) fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let (path, explicit) = match loader.config_path() {
        Some(path) => (path.clone(), true),
        None => (default_config_path()?, false),
    };

    if !explicit && !path.exists() {
        tracing::debug!(path = %path.display(), "No config file at default location");
        return Ok(());
    }

    let config = read_config_file(&path)?;
    tracing::debug!(path = %path.display(), "Loaded config file");
    loader.set_file_config(Some(config));
    Ok(())
}
