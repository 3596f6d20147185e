//! Key-value preference storage.
//!
//! The resolver persists the chosen theme name under one fixed key and reads
//! it back on startup. Any backend that can get, set and remove strings by
//! key works; [`MemoryStore`] serves tests and embedding, [`FileStore`]
//! serves the CLI.

mod file;
mod memory;

pub use file::{default_store_path, FileStore};
pub use memory::MemoryStore;

use crate::error::StoreError;

/// Minimal string store consumed by the resolver and mode source.
pub trait KeyValueStore {
    /// Read `key`; `Ok(None)` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    /// Delete `key`; removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
