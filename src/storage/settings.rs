//! Settings storage
//!
//! Manages persistence of application settings.

use crate::storage::{get_data_dir, StorageError};
use crate::types::Location;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// File name of the remembered-name record, relative to the data directory
    #[serde(default = "default_record_file")]
    pub record_file: String,
    /// Text shown when asking for a new name
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_record_file() -> String {
    "username.json".to_string()
}

fn default_prompt() -> String {
    "What is your name? ".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            record_file: default_record_file(),
            prompt: default_prompt(),
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// The record file must be a bare file name so it always lands inside the data directory.
    pub fn validate(&mut self) {
        let is_bare_name = Path::new(&self.record_file)
            .file_name()
            .is_some_and(|name| name == self.record_file.as_str());
        if self.record_file.trim().is_empty() || !is_bare_name {
            tracing::warn!(
                "Invalid record file name {:?}, using {}",
                self.record_file,
                default_record_file()
            );
            self.record_file = default_record_file();
        }

        if self.prompt.trim().is_empty() {
            self.prompt = default_prompt();
        }
    }

    /// Storage location of the remembered name under `data_dir`
    pub fn record_location(&self, data_dir: &Path) -> Location {
        Location::new(data_dir.join(&self.record_file))
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    match get_settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Load settings from a specific file, with error propagation
pub fn load_settings_from(path: &Path) -> Result<AppSettings, StorageError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!("Settings file not found, using defaults");
            return Ok(AppSettings::default());
        }
        Err(e) => return Err(StorageError::io(path, e)),
    };

    let mut settings: AppSettings =
        serde_json::from_str(&json).map_err(|e| StorageError::corrupt(path, e))?;

    settings.validate();

    tracing::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Save settings to a specific file
pub fn save_settings_to(settings: &AppSettings, path: &Path) -> Result<(), StorageError> {
    // Ensure the parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).map_err(|e| StorageError::io(path, e))?;

    tracing::debug!("Saved settings to {}", path.display());
    Ok(())
}
