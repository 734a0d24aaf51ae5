//! Raw upload persistence
//!
//! Uploaded bytes are written to durable storage before extraction runs.
//! Only a local filesystem backend is provided.

mod local;

pub use local::LocalFileStore;

use std::path::PathBuf;

use thiserror::Error;

/// Storage-specific errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to create upload directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Trait for upload storage backends
#[async_trait::async_trait]
pub trait FileStore: Send + Sync {
    /// Persist `data` for document `id`, returning where it was written
    async fn save(&self, id: &str, filename: &str, data: &[u8]) -> Result<PathBuf, StorageError>;
}
