//! # Settings Error Types
//!
//! Error types for settings operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (open/read/write failure)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SettingsError (this module) ← Adds the file path and categorization    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller recovers (e.g. substitutes a default) or aborts the path        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two variants are deliberately distinct so callers can match on them:
//! a missing key is recoverable in ways a failed file open is not.

use std::path::PathBuf;
use thiserror::Error;

/// Settings operation errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Requested key is not present in the store.
    ///
    /// ## When This Occurs
    /// - Key was never set
    /// - No loaded file contained the key
    #[error("Setting not found: {0}")]
    NotFound(String),

    /// Settings file could not be opened for reading or writing.
    ///
    /// ## When This Occurs
    /// - File doesn't exist (load)
    /// - Permissions issue
    /// - Disk full (save)
    #[error("Settings file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SettingsError {
    /// Creates a NotFound error for a given key.
    pub fn not_found(key: impl Into<String>) -> Self {
        SettingsError::NotFound(key.into())
    }

    /// Wraps an I/O error with the path that triggered it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SettingsError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = SettingsError::not_found("username");
        assert_eq!(err.to_string(), "Setting not found: username");
    }

    #[test]
    fn test_io_carries_path() {
        let err = SettingsError::io(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("missing.txt"));
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
