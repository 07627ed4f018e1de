use rustc_hash::FxHashMap;

use super::{KeyValueStorage, StorageError};

/// In-memory storage for tests and local sessions.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStorage {
    entries: FxHashMap<String, String>,
}

impl InMemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw access for tests that seed or inspect stored text.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
