//! Shelf Configuration
//!
//! Defaults match the page this shelf replaces; an optional JSON document
//! stored under [`CONFIG_STORAGE_KEY`] can override individual fields.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{ShelfError, ShelfResult};
use crate::storage::KeyValueStorage;

/// Storage key the item list lives under
pub const DEFAULT_STORAGE_KEY: &str = "itemsData";
/// Storage key of the optional override document
pub const CONFIG_STORAGE_KEY: &str = "itemShelfConfig";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShelfConfig {
    /// Key of the persisted JSON array
    pub storage_key: String,
    /// Number of log records kept in the in-memory ring
    pub log_capacity: usize,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_capacity: 200,
            log_level: "info".to_string(),
        }
    }
}

impl ShelfConfig {
    /// Read the override document from `storage`, defaults if there is none
    pub fn load<S: KeyValueStorage>(storage: &S) -> ShelfResult<Self> {
        match storage.get(CONFIG_STORAGE_KEY)? {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }

    /// Parse an override document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> ShelfResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ShelfError::Config(e.to_string()))?;
        if config.storage_key.trim().is_empty() {
            return Err(ShelfError::Config("storage_key must not be empty".to_string()));
        }
        LevelFilter::from_str(&config.log_level)
            .map_err(|_| ShelfError::Config(format!("unknown log level '{}'", config.log_level)))?;
        Ok(config)
    }

    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}
