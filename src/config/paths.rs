//! Path management for ql
//!
//! ## Path Resolution Order
//!
//! 1. `QL_SETTINGS_FILE` environment variable (if set)
//! 2. `~/.qlrc` in the user's home directory

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::QlError;

/// Name of the settings file inside the home directory
pub const SETTINGS_FILE_NAME: &str = ".qlrc";

/// Environment variable overriding the settings file location
pub const SETTINGS_ENV_VAR: &str = "QL_SETTINGS_FILE";

/// Manages the paths used by ql
#[derive(Debug, Clone)]
pub struct QlPaths {
    settings_file: PathBuf,
}

impl QlPaths {
    /// Create a new QlPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, QlError> {
        if let Some(custom) = std::env::var_os(SETTINGS_ENV_VAR).filter(|v| !v.is_empty()) {
            return Ok(Self::with_settings_file(PathBuf::from(custom)));
        }

        let dirs = BaseDirs::new()
            .ok_or_else(|| QlError::Config("Could not determine home directory".into()))?;
        Ok(Self::with_settings_file(
            dirs.home_dir().join(SETTINGS_FILE_NAME),
        ))
    }

    /// Create QlPaths pointing at an explicit settings file (useful for testing)
    pub fn with_settings_file(settings_file: PathBuf) -> Self {
        Self { settings_file }
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }

    /// Check if ql has been set up (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file.exists()
    }
}

/// Expand a leading `~` in a user supplied path to the home directory
pub fn expand_home(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}
