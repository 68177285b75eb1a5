//! User settings for promissoria-cli
//!
//! Manages user preferences: the default parties and locations stamped on
//! new notes, and the page layout used for HTML export.

use serde::{Deserialize, Serialize};

use super::paths::PromissoriaPaths;
use crate::error::PromissoriaError;

/// User settings for promissoria-cli
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default beneficiary (creditor) name for new notes
    #[serde(default = "default_beneficiary_name")]
    pub default_beneficiary_name: String,

    /// Default beneficiary CNPJ
    #[serde(default = "default_beneficiary_cnpj")]
    pub default_beneficiary_cnpj: String,

    /// Default issue city
    #[serde(default = "default_city")]
    pub default_city: String,

    /// Default state (UF)
    #[serde(default = "default_state")]
    pub default_state: String,

    /// Default payment location
    #[serde(default = "default_payment_location")]
    pub default_payment_location: String,

    /// Use the compact save-paper layout by default
    #[serde(default)]
    pub save_paper: bool,

    /// Notes per page for HTML export (clamped to the layout capacity)
    #[serde(default = "default_notes_per_page")]
    pub notes_per_page: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_beneficiary_name() -> String {
    "Nome do Beneficiário".to_string()
}

fn default_beneficiary_cnpj() -> String {
    "00.000.000/0000-00".to_string()
}

fn default_city() -> String {
    "Indaial".to_string()
}

fn default_state() -> String {
    "SC".to_string()
}

fn default_payment_location() -> String {
    "Indaial/SC".to_string()
}

fn default_notes_per_page() -> usize {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_beneficiary_name: default_beneficiary_name(),
            default_beneficiary_cnpj: default_beneficiary_cnpj(),
            default_city: default_city(),
            default_state: default_state(),
            default_payment_location: default_payment_location(),
            save_paper: false,
            notes_per_page: default_notes_per_page(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PromissoriaPaths) -> Result<Self, PromissoriaError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PromissoriaError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PromissoriaError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PromissoriaPaths) -> Result<(), PromissoriaError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PromissoriaError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| PromissoriaError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
