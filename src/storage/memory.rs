//! In-memory key-value backend
//!
//! Holds values in a `RwLock<HashMap>`. An optional byte quota models a
//! browser store that refuses writes once full.

use super::KeyValueStore;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory store, optionally bounded by total value bytes
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    /// Create an unbounded store
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            quota_bytes: None,
        }
    }

    /// Create a store that rejects writes pushing total value size past `quota_bytes`
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.read().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> Error {
    Error::StorageUnavailable("memory store lock poisoned".to_string())
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().map_err(poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().map_err(poisoned)?;

        if let Some(quota) = self.quota_bytes {
            let others: usize = values
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            if others + value.len() > quota {
                return Err(Error::StorageUnavailable(format!(
                    "quota exceeded: {} bytes requested, {} allowed",
                    others + value.len(),
                    quota
                )));
            }
        }

        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.write().map_err(poisoned)?.remove(key);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
