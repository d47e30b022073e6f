//! Path management for finsight
//!
//! ## Path Resolution Order
//!
//! 1. `FINSIGHT_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/finsight` on Linux, `%APPDATA%\finsight\config` on Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::FinsightError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FINSIGHT_DATA_DIR";

/// Manages all paths used by finsight
#[derive(Debug, Clone)]
pub struct FinsightPaths {
    base_dir: PathBuf,
}

impl FinsightPaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FinsightError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use a specific base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FinsightError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinsightError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check whether settings have been saved
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FinsightError> {
    ProjectDirs::from("", "", "finsight")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FinsightError::Config("Could not determine home directory".into()))
}
