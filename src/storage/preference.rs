//! Remembered preference storage
//!
//! A preference is one text value kept as a JSON string literal (e.g. `"Alice"`) in a
//! single file. A missing file is a miss, not an error; unreadable or undecodable files
//! are reported as [`StorageError::Io`] and [`StorageError::Corrupt`] respectively.
//! Deciding that an empty value means "unset" is left to [`resolve_value`].

use crate::storage::StorageError;
use crate::types::{Location, Resolution};
use crate::ui::InputSource;
use std::fs;
use std::io;

/// Read the value remembered at `location`
///
/// Returns `Ok(None)` when nothing has been stored yet.
pub fn get_stored_value(location: &Location) -> Result<Option<String>, StorageError> {
    let json = match fs::read_to_string(location.path()) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("No record at {}", location);
            return Ok(None);
        }
        Err(e) => return Err(StorageError::io(location.path(), e)),
    };

    let value: String =
        serde_json::from_str(&json).map_err(|e| StorageError::corrupt(location.path(), e))?;

    tracing::debug!("Loaded record from {}", location);
    Ok(Some(value))
}

/// Write `value` to `location`, replacing whatever was there
///
/// The encoded value goes to a sibling staging file first and is then renamed over the
/// record, so a reader never observes a partially written value.
pub fn store_value(location: &Location, value: &str) -> Result<(), StorageError> {
    let path = location.path();

    // Ensure the parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
    }

    let json = serde_json::to_string(value)?;
    let staging = location.staging_path();
    let staged = fs::write(&staging, json)
        .map_err(|e| StorageError::io(&staging, e))
        .and_then(|()| fs::rename(&staging, path).map_err(|e| StorageError::io(path, e)));

    // A failed write or rename must not leave a partial staging file behind
    if staged.is_err() {
        let _ = fs::remove_file(&staging);
    }
    staged?;

    tracing::debug!("Saved record to {}", location);
    Ok(())
}

/// Ask `input` for a new value and store it at `location`
///
/// The line is stored exactly as entered. A blank line or end of input stores nothing
/// and yields [`StorageError::EmptyInput`].
pub fn request_and_store_value<I: InputSource>(
    location: &Location,
    input: &mut I,
    prompt: &str,
) -> Result<String, StorageError> {
    let value = input
        .read_line(prompt)
        .map_err(StorageError::Input)?
        .filter(|line| !line.trim().is_empty())
        .ok_or(StorageError::EmptyInput)?;

    store_value(location, &value)?;
    tracing::info!("Stored new value at {}", location);
    Ok(value)
}

/// Return the value remembered at `location`, asking for one if none is stored
///
/// A record holding an empty value counts as unset and is replaced.
pub fn resolve_value<I: InputSource>(
    location: &Location,
    input: &mut I,
    prompt: &str,
) -> Result<Resolution, StorageError> {
    match get_stored_value(location)? {
        Some(value) if !value.is_empty() => return Ok(Resolution::Recalled(value)),
        Some(_) => {
            tracing::warn!("Record at {} holds an empty value, treating as unset", location)
        }
        None => {}
    }

    tracing::info!("No value remembered at {}, prompting", location);
    request_and_store_value(location, input, prompt).map(Resolution::Created)
}
