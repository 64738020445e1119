//! Storage-specific error type for the file-backed store.

use stays_domain::error::StaysError;

/// Errors originating from the JSON storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the store file failed.
    #[error("store file error")]
    Io(#[from] std::io::Error),

    /// The store file holds invalid JSON.
    #[error("store file deserialization error")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for StaysError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
