//! Value Hierarchy error types

use thiserror::Error;

/// Value Hierarchy error type
#[derive(Error, Debug)]
pub enum Error {
    /// Stored aggregate is present but cannot be parsed
    #[error("Corrupt state: {0}")]
    CorruptState(String),

    /// The storage substrate rejected a write or delete
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Group creation with a blank label or an empty selection
    #[error("Invalid group: {0}")]
    InvalidGroup(String),

    /// Answer slot outside category 1..=8 / index 1..=3
    #[error("Invalid answer slot: category {category}, index {index}")]
    InvalidSlot { category: u32, index: u32 },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for Value Hierarchy operations
pub type Result<T> = std::result::Result<T, Error>;
