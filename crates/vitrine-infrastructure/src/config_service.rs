//! Configuration loading.

use std::path::Path;

use vitrine_core::config::ConfigRoot;
use vitrine_core::error::{Result, VitrineError};

use crate::paths::VitrinePaths;

/// Loads `vitrine.toml`, falling back to built-in defaults.
pub struct ConfigService;

impl ConfigService {
    /// Loads configuration from the given path, or from
    /// `~/.config/vitrine/vitrine.toml` when `None`.
    ///
    /// A missing file yields the default configuration; a present but
    /// malformed file is an error (silently ignoring a broken config would
    /// mask operator mistakes).
    pub fn load(path: Option<&Path>) -> Result<ConfigRoot> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => VitrinePaths::config_file()
                .map_err(|e| VitrineError::config(e.to_string()))?,
        };

        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(ConfigRoot::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config = ConfigRoot::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}
