//! Insertion-ordered key/value store with file persistence

use std::fs;
use std::path::Path;

use crate::base36;
use crate::error::{Error, Result};
use crate::format;

/// Reserved key holding the fields checksum in base-36.
pub const CHECKSUM_KEY: &str = "checksum";

/// Ordered string-to-string mapping backed by a settings file.
///
/// Iteration and persistence follow insertion order; setting an existing
/// key overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropStore {
    entries: Vec<(String, String)>,
}

impl PropStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from `path`. A missing file yields an empty store;
    /// any other I/O failure propagates.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, starting empty");
                return Ok(Self::new());
            }
            Err(e) => return Err(Error::io(path, e)),
        };

        let store = Self {
            entries: format::parse(&content),
        };
        tracing::debug!(path = %path.display(), entries = store.len(), "loaded settings file");
        Ok(store)
    }

    /// Persist the store to `path`, preceded by `comments` as a `#` header.
    ///
    /// An empty store is a no-op: no file is created for a no-op result.
    /// The file is created if absent, but missing parent directories are
    /// an error. `fs::write` closes the handle on every exit path.
    pub fn save(&self, path: &Path, comments: &str) -> Result<()> {
        if self.is_empty() {
            tracing::debug!(path = %path.display(), "store empty, skipping write");
            return Ok(());
        }

        let mut out = String::new();
        for line in comments.lines() {
            out.push_str("# ");
            out.push_str(line);
            out.push('\n');
        }
        for (key, value) in &self.entries {
            out.push_str(&format::escape_key(key));
            out.push('=');
            out.push_str(&format::escape_value(value));
            out.push('\n');
        }

        fs::write(path, out).map_err(|e| Error::io(path, e))?;
        tracing::debug!(path = %path.display(), entries = self.len(), "wrote settings file");
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert or overwrite a value, preserving the key's original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The persisted checksum, or 0 when absent or unparseable.
    pub fn checksum(&self) -> i32 {
        self.get(CHECKSUM_KEY)
            .and_then(base36::decode)
            .unwrap_or(0)
    }

    /// Store `value` under the reserved checksum key in base-36.
    pub fn set_checksum(&mut self, value: i32) {
        self.set(CHECKSUM_KEY, base36::encode(value));
    }
}
