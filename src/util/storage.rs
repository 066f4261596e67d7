//! Key-value persistence behind a small trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme override is the only persisted value on the page. Going through
//! `KeyValueStore` keeps `localStorage` access in one place and lets tests
//! run against `MemoryStore`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::UiError;

/// String key-value store with `localStorage` semantics.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`UiError::Storage`] when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), UiError>;
}

/// In-process store. Used natively and when browser storage is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Outcome of a backend read. A failed read is logged and counts as missing.
pub fn settle_read<E: std::fmt::Debug>(key: &str, read: Result<Option<String>, E>) -> Option<String> {
    match read {
        Ok(value) => value,
        Err(e) => {
            log::warn!("storage read of {key:?} failed: {e:?}");
            None
        }
    }
}

/// Browser `localStorage`, or memory when storage is disabled (private
/// browsing, sandboxed frames).
#[cfg(feature = "hydrate")]
pub enum BrowserStore {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

#[cfg(feature = "hydrate")]
impl BrowserStore {
    pub fn open() -> Self {
        match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Self::Local(storage),
            _ => {
                log::warn!("localStorage unavailable; theme choice will not persist");
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => settle_read(key, storage.get_item(key)),
            Self::Memory(memory) => memory.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), UiError> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| UiError::Storage(format!("{e:?}"))),
            Self::Memory(memory) => memory.set_item(key, value),
        }
    }
}
