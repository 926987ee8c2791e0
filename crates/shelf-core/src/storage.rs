//! Key-Value Storage
//!
//! Abstract string store the item list is persisted into.
//! The browser build uses `window.localStorage`, tests use memory.

use std::collections::HashMap;

use crate::error::{ShelfError, ShelfResult};

pub trait KeyValueStorage {
    fn get(&self, key: &str) -> ShelfResult<Option<String>>;

    /// Overwrite the whole value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> ShelfResult<()>;
}

/// In-memory storage, optionally refusing writes
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one raw value
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::default();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }

    /// Make every following `set` fail, like a full quota would
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> ShelfResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> ShelfResult<()> {
        if self.fail_writes {
            return Err(ShelfError::Storage("quota exceeded".to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
