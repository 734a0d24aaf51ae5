//! Ingestion types

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::extract::ExtractError;
use crate::storage::StorageError;

/// Reported back to the uploader once the document is stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub id: String,
    pub filename: String,
    /// Extracted content length in characters
    pub length: usize,
}

/// Failures that abort an upload
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Unsupported file type: {0:?}. Only .pdf or .txt are supported")]
    UnsupportedFileType(String),

    #[error("Failed to save file: {0}")]
    Persistence(#[from] StorageError),

    #[error("Failed to extract text: {0}")]
    Extraction(#[from] ExtractError),
}
