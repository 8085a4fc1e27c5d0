//! Preference types
//!
//! The storage location of a remembered value and the outcome of resolving it.

use std::fmt;
use std::path::{Path, PathBuf};

/// Where a single preference value lives on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location(PathBuf);

impl Location {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Sibling file used while a new value is being written
    pub(crate) fn staging_path(&self) -> PathBuf {
        let mut name = self
            .0
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.0.with_file_name(name)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// How a value was obtained by [`resolve_value`](crate::storage::preference::resolve_value)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Read back from an existing record
    Recalled(String),
    /// Requested from the input source and written to a new record
    Created(String),
}

impl Resolution {
    pub fn value(&self) -> &str {
        match self {
            Resolution::Recalled(v) | Resolution::Created(v) => v,
        }
    }

    pub fn into_value(self) -> String {
        match self {
            Resolution::Recalled(v) | Resolution::Created(v) => v,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, Resolution::Created(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_path_is_sibling() {
        let location = Location::new("/data/username.json");
        assert_eq!(
            location.staging_path(),
            PathBuf::from("/data/username.json.tmp")
        );
    }

    #[test]
    fn test_resolution_value() {
        let recalled = Resolution::Recalled("Alice".to_string());
        let created = Resolution::Created("Bob".to_string());
        assert_eq!(recalled.value(), "Alice");
        assert!(!recalled.was_created());
        assert!(created.was_created());
        assert_eq!(created.into_value(), "Bob");
    }
}
