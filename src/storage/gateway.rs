//! Persistence gateway for the `UserData` aggregate
//!
//! Stores exactly one aggregate per installation under one fixed key, as a
//! single JSON blob with no header or version tag. There is no locking
//! around load-modify-save: the last `save` wins.

use super::{FileStore, KeyValueStore, MemoryStore};
use crate::config::{StorageBackend, StorageConfig};
use crate::error::{Error, Result};
use crate::schema::UserData;

/// Key the aggregate is stored under unless configured otherwise
pub const DEFAULT_KEY: &str = "value-hierarchy-data";

/// Loads, saves and resets the aggregate through a `KeyValueStore`
pub struct UserDataStore<S: KeyValueStore> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> UserDataStore<S> {
    /// Gateway over `backend` using the default key
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, DEFAULT_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read the aggregate, surfacing an unparseable value as `CorruptState`
    pub fn try_load(&self) -> Result<Option<UserData>> {
        let Some(raw) = self.backend.get(&self.key)? else {
            tracing::debug!(key = %self.key, "No stored user data");
            return Ok(None);
        };

        let data = serde_json::from_str::<UserData>(&raw)
            .map_err(|e| Error::CorruptState(format!("{}: {}", self.key, e)))?;
        tracing::debug!(
            key = %self.key,
            answers = data.answers.len(),
            groups = data.groups.len(),
            "Loaded user data"
        );
        Ok(Some(data))
    }

    /// Read the aggregate; corrupt or unreadable state is logged and treated as absent
    pub fn load(&self) -> Option<UserData> {
        match self.try_load() {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Failed to load user data: {}", e);
                None
            }
        }
    }

    /// `load()`, falling back to a fresh aggregate
    pub fn load_or_initial(&self) -> UserData {
        self.load().unwrap_or_else(Self::create_initial)
    }

    /// Serialize and overwrite the stored aggregate.
    ///
    /// A rejected write is logged and returned as `StorageUnavailable`; the
    /// previously stored value stays authoritative.
    pub fn save(&self, data: &UserData) -> Result<()> {
        let json = serde_json::to_string(data)?;
        match self.backend.set(&self.key, &json) {
            Ok(()) => {
                tracing::debug!(
                    key = %self.key,
                    backend = self.backend.name(),
                    bytes = json.len(),
                    "Saved user data"
                );
                Ok(())
            }
            Err(e @ Error::StorageUnavailable(_)) => {
                tracing::warn!("Failed to save user data: {}", e);
                Err(e)
            }
            Err(e) => {
                tracing::warn!("Failed to save user data: {}", e);
                Err(Error::StorageUnavailable(e.to_string()))
            }
        }
    }

    /// Delete the stored aggregate. Succeeds when nothing is stored.
    pub fn reset(&self) -> Result<()> {
        self.backend.remove(&self.key).map_err(|e| {
            tracing::warn!("Failed to reset user data: {}", e);
            e
        })
    }

    /// Empty aggregate stamped with the current time; no I/O
    pub fn create_initial() -> UserData {
        UserData::new()
    }
}

impl UserDataStore<Box<dyn KeyValueStore>> {
    /// Open the backend named by the storage configuration
    pub fn from_config(config: &StorageConfig) -> Result<Self> {
        let backend: Box<dyn KeyValueStore> = match config.backend {
            StorageBackend::File => Box::new(FileStore::new(&config.data_dir)?),
            StorageBackend::Memory => match config.quota_bytes {
                Some(quota) => Box::new(MemoryStore::with_quota(quota)),
                None => Box::new(MemoryStore::new()),
            },
        };
        tracing::debug!(backend = backend.name(), key = %config.key, "Opened storage");
        Ok(Self::with_key(backend, config.key.clone()))
    }
}

/// Whether a caller must send the user back to the entry point: no stored
/// data, or data with no answers yet.
pub fn needs_entry(data: Option<&UserData>) -> bool {
    data.map_or(true, |d| d.answers.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_store() -> UserDataStore<MemoryStore> {
        UserDataStore::new(MemoryStore::new())
    }

    #[test]
    fn test_load_absent() {
        let store = make_store();
        assert!(store.load().is_none());
        assert!(store.try_load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let store = make_store();
        let data = UserDataStore::<MemoryStore>::create_initial()
            .update_answer(1, 2, "資格のテキスト", Some("将来のため".to_string()))
            .unwrap();

        store.save(&data).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, data);
        assert_eq!(loaded.answers[0].id, 2);
        assert_eq!(loaded.answers[0].purpose.as_deref(), Some("将来のため"));
    }

    #[test]
    fn test_load_corrupt_is_absent() {
        let store = make_store();
        store.backend().set(DEFAULT_KEY, "{not json").unwrap();

        assert!(store.load().is_none());
        assert!(matches!(store.try_load(), Err(Error::CorruptState(_))));
    }

    #[test]
    fn test_load_wrong_shape_is_corrupt() {
        let store = make_store();
        store.backend().set(DEFAULT_KEY, r#"{"answers": 3}"#).unwrap();

        assert!(matches!(store.try_load(), Err(Error::CorruptState(_))));
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_rejected_keeps_previous() {
        let store = UserDataStore::new(MemoryStore::with_quota(200));
        let small = UserData::new().update_answer(1, 1, "A", None).unwrap();
        store.save(&small).unwrap();

        let big = small
            .update_answer(1, 2, "x".repeat(500), None)
            .unwrap();
        let result = store.save(&big);
        assert!(matches!(result, Err(Error::StorageUnavailable(_))));

        // In-memory value untouched, durable snapshot still the old one
        assert_eq!(big.answers.len(), 2);
        assert_eq!(store.load().unwrap(), small);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let store = make_store();
        store.save(&UserData::new()).unwrap();

        store.reset().unwrap();
        assert!(store.load().is_none());
        store.reset().unwrap();
    }

    #[test]
    fn test_create_initial_is_empty() {
        let data = UserDataStore::<MemoryStore>::create_initial();
        assert!(data.answers.is_empty());
        assert!(data.groups.is_empty());
        assert!(data.insights.is_empty());
        assert!(data.timestamp > 0);
    }

    #[test]
    fn test_load_or_initial() {
        let store = make_store();
        assert!(store.load_or_initial().answers.is_empty());

        let data = UserData::new().update_answer(3, 3, "創作", None).unwrap();
        store.save(&data).unwrap();
        assert_eq!(store.load_or_initial(), data);
    }

    #[test]
    fn test_update_after_loading_duplicate_ids() {
        let store = make_store();
        store
            .backend()
            .set(
                DEFAULT_KEY,
                r#"{"answers":[
                    {"id":1,"category":1,"index":1,"text":"a"},
                    {"id":1,"category":1,"index":1,"text":"b"}
                ],"groups":[],"insights":[],"timestamp":1}"#,
            )
            .unwrap();

        let data = store.load().unwrap().update_answer(1, 1, "new", None).unwrap();
        store.save(&data).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.answers.len(), 1);
        let report = crate::export::export_text(&reloaded);
        assert!(report.contains("1. new\n"));
        assert!(!report.contains("1. b"));
        assert!(!report.contains("1. a"));
    }

    #[test]
    fn test_custom_key() {
        let store = UserDataStore::with_key(MemoryStore::new(), "other");
        store.save(&UserData::new()).unwrap();
        assert!(store.backend().get("other").unwrap().is_some());
        assert!(store.backend().get(DEFAULT_KEY).unwrap().is_none());
    }

    #[test]
    fn test_needs_entry() {
        assert!(needs_entry(None));
        let empty = UserData::new();
        assert!(needs_entry(Some(&empty)));
        let answered = empty.update_answer(1, 1, "A", None).unwrap();
        assert!(!needs_entry(Some(&answered)));
    }

    #[test]
    fn test_from_config_file_backend() {
        let dir = TempDir::new().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::File,
            data_dir: dir.path().join("vh"),
            key: "custom-key".to_string(),
            quota_bytes: None,
        };

        let store = UserDataStore::from_config(&config).unwrap();
        store.save(&UserData::new()).unwrap();

        assert_eq!(store.backend().name(), "file");
        assert!(dir.path().join("vh").join("custom-key.json").exists());
    }

    #[test]
    fn test_from_config_memory_backend() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            quota_bytes: Some(10),
            ..StorageConfig::default()
        };

        let store = UserDataStore::from_config(&config).unwrap();
        assert_eq!(store.backend().name(), "memory");
        assert!(store.save(&UserData::new()).is_err());
    }
}
