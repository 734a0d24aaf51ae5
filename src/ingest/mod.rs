//! Ingestion gateway
//!
//! Turns an upload into a stored document:
//!
//! 1. **Validate**: only `.pdf` and `.txt` filenames are accepted.
//! 2. **Persist**: raw bytes are written through the [`FileStore`](crate::storage::FileStore).
//! 3. **Extract**: text is read back through the [`TextExtractor`](crate::extract::TextExtractor).
//! 4. **Store**: a new [`Document`](crate::document::Document) is added to the store.
//!
//! A failure at any step leaves the document store untouched.

mod gateway;
mod types;

pub use gateway::{generate_id, IngestionGateway};
pub use types::{IngestError, UploadReceipt};
