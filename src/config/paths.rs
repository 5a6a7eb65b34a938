//! Path management for the signup wizard
//!
//! ## Path Resolution Order
//!
//! 1. `SIGNUP_WIZARD_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/signup-wizard` on Linux)
//! 3. `./.signup-wizard` when no home directory can be determined

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::SignupError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "SIGNUP_WIZARD_DIR";

/// Manages all paths used by the signup wizard
#[derive(Debug, Clone)]
pub struct SignupPaths {
    base_dir: PathBuf,
}

impl SignupPaths {
    /// Resolve the base directory
    pub fn new() -> Self {
        let base_dir = match std::env::var_os(DIR_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path(),
        };

        Self { base_dir }
    }

    /// Create SignupPaths with a custom base directory (useful for testing)
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

    /// Default location of a user pricing table
    pub fn pricing_file(&self) -> PathBuf {
        self.base_dir.join("pricing.yaml")
    }

    /// Log file written while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("signup.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SignupError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SignupError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if `init` has been run (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

impl Default for SignupPaths {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_default_path() -> PathBuf {
    ProjectDirs::from("", "", "signup-wizard")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".signup-wizard"))
}
