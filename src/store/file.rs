//! JSON-file preference store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::config::config_root_dir;
use crate::error::StoreError;

/// Returns the default preference file (`~/.config/theme-bridge/preferences.json`).
pub fn default_store_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join("theme-bridge").join("preferences.json"))
}

/// Store that keeps all keys in one flat JSON object on disk.
///
/// Every operation re-reads the file so separate handles to the same path
/// observe each other's writes.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`default_store_path`].
    pub fn open_default() -> Result<Self, StoreError> {
        default_store_path().map(Self::new).ok_or_else(|| {
            StoreError::Unavailable("unable to resolve config root for preferences".to_string())
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => serde_json::from_str(&text).map_err(|err| StoreError::Parse {
                path: self.path.display().to_string(),
                message: err.to_string(),
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(entries).map_err(|err| StoreError::Parse {
            path: self.path.display().to_string(),
            message: err.to_string(),
        })?;
        std::fs::write(&self.path, format!("{text}\n"))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.write(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }
}
