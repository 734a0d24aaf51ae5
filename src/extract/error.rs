//! Extraction error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// Persisted file could not be read back
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bytes are not a loadable PDF
    #[error("Failed to load PDF: {0}")]
    PdfLoad(String),

    /// A page's content stream could not be turned into text
    #[error("Failed to extract text from page {page}: {message}")]
    PdfPage { page: u32, message: String },

    /// Blocking extraction task panicked or was cancelled
    #[error("Extraction task failed: {0}")]
    Join(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
