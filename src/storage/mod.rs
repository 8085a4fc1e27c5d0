//! Persistent storage
//!
//! This module handles all data persistence: the remembered preference record and the
//! application settings.

pub mod preference;
pub mod settings;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing persisted data
#[derive(Debug, Error)]
pub enum StorageError {
    /// The record could not be read or written
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record exists but does not hold a valid encoded value
    #[error("corrupt record at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The input source itself failed
    #[error("failed to read input: {0}")]
    Input(#[source] std::io::Error),

    /// The input source produced nothing to store
    #[error("no value entered")]
    EmptyInput,

    /// The platform has no usable data directory
    #[error("could not determine a data directory for this platform")]
    NoDataDir,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Corrupt {
            path: path.into(),
            source,
        }
    }
}

/// Get the application data directory
///
/// Linux: ~/.local/share/remembrance, macOS: ~/Library/Application Support/Remembrance,
/// Windows: %APPDATA%\Remembrance\data
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("com", "Remembrance", "Remembrance")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}
