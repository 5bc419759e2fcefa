//! # Settings Store
//!
//! A string key → string value store with flat-file persistence.
//!
//! ## Persistence Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Settings File Format                                 │
//! │                                                                         │
//! │  Plain text, whitespace-delimited alternating key/value tokens:         │
//! │                                                                         │
//! │      username user1                                                     │
//! │      theme dark                                                         │
//! │                                                                         │
//! │  • No quoting, no escaping, no comments                                 │
//! │  • Read token-by-token until end of input                               │
//! │  • A trailing key with no value is not consumed                         │
//! │  • Written back as one `key value` pair per line                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store itself is an ordinary value: construct as many isolated
//! instances as you like (tests do). The process-wide shared instance
//! lives in [`crate::state`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{SettingsError, SettingsResult};

/// In-memory settings mapping with load/save to the flat text format.
///
/// ## Invariants
/// - Keys are unique; `set` and `load_from_path` overwrite (last write wins)
/// - Iteration order is the keys' sort order (BTreeMap), so saves are
///   deterministic
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    values: BTreeMap<String, String>,
}

impl SettingsStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`.
    ///
    /// ## Errors
    /// [`SettingsError::NotFound`] if the key was never set and no loaded
    /// file contained it. Never returns a sentinel value.
    pub fn get(&self, key: &str) -> SettingsResult<String> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| SettingsError::not_found(key))
    }

    /// Inserts or overwrites a setting.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Loads settings from a flat text file, overwriting existing keys.
    ///
    /// Parses whitespace-separated key/value token pairs until end of
    /// input; a malformed trailing key with no matching value is dropped.
    /// Returns the number of pairs loaded.
    ///
    /// ## Errors
    /// [`SettingsError::Io`] if the file cannot be read. An open failure
    /// aborts the whole operation before any parsing - the store is left
    /// untouched.
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> SettingsResult<usize> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| SettingsError::io(path, e))?;

        let mut tokens = contents.split_whitespace();
        let mut loaded = 0;
        while let Some(key) = tokens.next() {
            let Some(value) = tokens.next() else {
                // Trailing key without a value: stop, don't consume it.
                break;
            };
            self.values.insert(key.to_string(), value.to_string());
            loaded += 1;
        }

        debug!(?path, loaded, "Settings loaded");
        Ok(loaded)
    }

    /// Saves every setting to a flat text file, one `key value` pair per
    /// line, in the store's iteration order.
    ///
    /// ## Errors
    /// [`SettingsError::Io`] if the file cannot be written. An open failure
    /// aborts the whole operation before any writing.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> SettingsResult<()> {
        let path = path.as_ref();

        let mut contents = String::new();
        for (key, value) in &self.values {
            contents.push_str(key);
            contents.push(' ');
            contents.push_str(value);
            contents.push('\n');
        }

        fs::write(path, contents).map_err(|e| SettingsError::io(path, e))?;

        debug!(?path, count = self.values.len(), "Settings saved");
        Ok(())
    }

    /// Returns the number of settings in the store.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Checks if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(key, value)` pairs in iteration (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
