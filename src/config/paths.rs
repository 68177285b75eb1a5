//! Path management for promissoria-cli
//!
//! Provides XDG-compliant path resolution for configuration and generated
//! documents.
//!
//! ## Path Resolution Order
//!
//! 1. `PROMISSORIA_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/promissoria-cli` or `~/.config/promissoria-cli`
//! 3. Windows: `%APPDATA%\promissoria-cli`

use std::path::PathBuf;

use crate::error::PromissoriaError;

/// Manages all paths used by promissoria-cli
#[derive(Debug, Clone)]
pub struct PromissoriaPaths {
    /// Base directory for all promissoria-cli data
    base_dir: PathBuf,
}

impl PromissoriaPaths {
    /// Create a new PromissoriaPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PromissoriaError> {
        let base_dir = if let Ok(custom) = std::env::var("PROMISSORIA_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PromissoriaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/promissoria-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the default output directory for generated documents
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), PromissoriaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PromissoriaError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.exports_dir()).map_err(|e| {
            PromissoriaError::Io(format!("Failed to create exports directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if promissoria-cli has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PromissoriaError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME").map(|home| PathBuf::from(home).join(".config"))
        })
        .map_err(|_| {
            PromissoriaError::Config("Could not determine home directory".into())
        })?;
    Ok(config_base.join("promissoria-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PromissoriaError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PromissoriaError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("promissoria-cli"))
}
