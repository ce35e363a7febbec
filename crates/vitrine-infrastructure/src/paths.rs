//! Unified path management for vitrine configuration files.
//!
//! All vitrine configuration and the persisted credential live under one
//! platform config directory, so every storage adapter resolves locations
//! through this module.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/vitrine/           # Config directory (XDG on Linux/macOS)
//! ├── vitrine.toml             # Application configuration
//! └── credential.json          # Persisted session credential
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for vitrine.
pub struct VitrinePaths;

impl VitrinePaths {
    /// Returns the vitrine configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/vitrine/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("vitrine"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("vitrine.toml"))
    }

    /// Returns the path to the persisted credential file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to prevent
    /// unauthorized access. The credential store sets them on every write.
    pub fn credential_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("credential.json"))
    }
}
