//! JSON-file backend for the persistent session store.
//!
//! The file holds one flat JSON object of string values. It is re-read on every
//! access so a second process sees the latest login or logout. A missing or
//! unreadable file reads as empty; write failures are logged and dropped.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use auth::SessionStorage;

type Entries = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Entries {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Entries::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session store unreadable");
                return Entries::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "session store is not a JSON object");
            Entries::new()
        })
    }

    fn save(&self, entries: &Entries) {
        let result = serde_json::to_string_pretty(entries)
            .map_err(io::Error::other)
            .and_then(|raw| fs::write(&self.path, raw));
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "session store write failed");
        }
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.load();
        entries.insert(key.to_owned(), value.to_owned());
        self.save(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.load();
        if entries.remove(key).is_some() {
            self.save(&entries);
        }
    }
}
