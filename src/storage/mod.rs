//! Storage: persistence port, backends, and the `UserData` gateway
//!
//! ```text
//! UserDataStore ──(one fixed key)──▶ KeyValueStore
//!                                     ├── MemoryStore (tests, embedding)
//!                                     └── FileStore   (<dir>/<key>.json)
//! ```

pub mod file;
pub mod gateway;
pub mod memory;

pub use file::FileStore;
pub use gateway::{needs_entry, UserDataStore};
pub use memory::MemoryStore;

use crate::error::Result;

/// String-keyed durable store the gateway writes through.
///
/// Implementations report a rejected write or delete as
/// `Error::StorageUnavailable`. Reading a missing key is `Ok(None)`.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`; deleting a missing key succeeds
    fn remove(&self, key: &str) -> Result<()>;

    /// Human-readable backend name (used in logs)
    fn name(&self) -> &str;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
