//! Error types for the core domain.

use thiserror::Error;

/// Core domain error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid digest: {0}")]
    InvalidDigest(String),

    #[error("item id {id} out of range (collection has {size} items)")]
    ItemOutOfRange { id: u64, size: u32 },

    #[error("invalid content uri: {0}")]
    InvalidContentUri(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
