//! Session storage backends
//!
//! The session persists two values between application starts: the
//! serialized user object and the bearer token. The backend is injected so
//! tests can run against memory while the binary uses a file.

use crate::error::Result;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

/// Storage key for the persisted user object
pub const USER_KEY: &str = "portal.user";
/// Storage key for the persisted bearer token
pub const TOKEN_KEY: &str = "portal.token";

/// Key-value storage for session data.
///
/// Values are stored as plain strings, unencrypted and without expiry.
pub trait SessionStorage {
    /// Load the value stored under a key, if any
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store a value under a key, replacing any previous value
    fn store(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under a key, if any
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: SessionStorage + ?Sized> SessionStorage for &mut S {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn store(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).store(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-memory storage, used by tests and short-lived tools
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: FxHashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed storage holding all keys in one JSON object
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a storage backed by the given file.
    ///
    /// The file is created on the first `store` call; a missing file reads
    /// as empty storage.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<FxHashMap<String, String>> {
        if !self.path.exists() {
            return Ok(FxHashMap::default());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_entries(&self, entries: &FxHashMap<String, String>) -> Result<()> {
        let contents = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn store(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
