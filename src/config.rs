//! Value Hierarchy configuration management
//!
//! Loaded from a TOML file; every field has a default so an empty file (or
//! no file at all) is a valid configuration.
//!
//! ```toml
//! [storage]
//! backend = "file"
//! data_dir = "/home/me/.local/share/value-hierarchy"
//! key = "value-hierarchy-data"
//! ```

use crate::error::{Error, Result};
use crate::storage::gateway::DEFAULT_KEY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValueHierarchyConfig {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

impl ValueHierarchyConfig {
    /// Read and parse a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("read {}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}

/// Which key-value backend holds the aggregate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backend kind
    pub backend: StorageBackend,

    /// Base directory for the file backend
    pub data_dir: PathBuf,

    /// Key the aggregate is stored under
    pub key: String,

    /// Byte quota for the memory backend (unbounded when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_bytes: Option<usize>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            data_dir: crate::storage::FileStore::default_dir(),
            key: DEFAULT_KEY.to_string(),
            quota_bytes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ValueHierarchyConfig::default();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.key, "value-hierarchy-data");
        assert!(config.storage.data_dir.ends_with("value-hierarchy"));
        assert!(config.storage.quota_bytes.is_none());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ValueHierarchyConfig::from_toml("").unwrap();
        assert_eq!(config.storage.key, DEFAULT_KEY);
    }

    #[test]
    fn test_partial_storage_section() {
        let config = ValueHierarchyConfig::from_toml(
            r#"
            [storage]
            backend = "memory"
            quota_bytes = 5000000
            "#,
        )
        .unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.quota_bytes, Some(5_000_000));
        assert_eq!(config.storage.key, DEFAULT_KEY);
    }

    #[test]
    fn test_invalid_toml() {
        let result = ValueHierarchyConfig::from_toml("[storage]\nbackend = \"cloud\"");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nkey = \"mine\"\ndata_dir = \"/tmp/vh\"\n").unwrap();

        let config = ValueHierarchyConfig::load(&path).unwrap();
        assert_eq!(config.storage.key, "mine");
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/vh"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = ValueHierarchyConfig::load(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ValueHierarchyConfig::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[storage]"));
        assert!(toml.contains("backend = \"file\""));

        let parsed = ValueHierarchyConfig::from_toml(&toml).unwrap();
        assert_eq!(parsed.storage.key, config.storage.key);
        assert_eq!(parsed.storage.data_dir, config.storage.data_dir);
    }
}
