//! Path management for Finsight
//!
//! ## Path Resolution Order
//!
//! 1. `FINSIGHT_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `finsight`
//!    (`~/.config/finsight` on Linux, `%APPDATA%\finsight` on Windows)

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::error::FinsightError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FINSIGHT_DATA_DIR";

/// Manages all paths used by Finsight
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
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };
        Ok(Self { base_dir })
    }

    /// Create FinsightPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding the record files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Default destination for exports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn accounts_file(&self) -> PathBuf {
        self.data_dir().join("accounts.json")
    }

    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    pub fn goals_file(&self) -> PathBuf {
        self.data_dir().join("goals.json")
    }

    /// Ensure the base, data and export directories exist
    pub fn ensure_directories(&self) -> Result<(), FinsightError> {
        for dir in [self.base_dir.clone(), self.data_dir(), self.export_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                FinsightError::Io(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }

    /// Check if Finsight has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FinsightError> {
    ProjectDirs::from("", "", "finsight")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FinsightError::Config("Could not determine home directory".into()))
}
