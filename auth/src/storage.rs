//! Persistent session store contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! The in-memory session is mirrored into a durable string key/value store so
//! it survives reloads. The browser client backs this with `localStorage`, the
//! CLI with a JSON file, and tests with [`MemoryStorage`].
//!
//! TRADE-OFFS
//! ==========
//! Operations are infallible and synchronous, like `localStorage` itself.
//! Backends that can fail (quota, I/O) log and drop the write instead of
//! surfacing an error the session layer has no way to recover from. Values are
//! stored in plaintext with no expiry.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Key holding the raw token string.
pub const TOKEN_KEY: &str = "token";
/// Key holding the JSON-serialized user profile.
pub const USER_KEY: &str = "user";

/// Durable string key/value storage.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-local store used by tests and headless front ends.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with initial entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value.to_owned()))
            .collect();
        Self {
            entries: RefCell::new(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl<S: SessionStorage + ?Sized> SessionStorage for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}
