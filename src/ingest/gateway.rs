use std::sync::Arc;

use uuid::Uuid;

use super::types::{IngestError, UploadReceipt};
use crate::document::{Document, DocumentStore};
use crate::extract::{ExtractError, FileKind, TextExtractor};
use crate::storage::FileStore;

/// Fresh random document id
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Validates, persists, extracts and stores uploads
#[derive(Clone)]
pub struct IngestionGateway {
    store: DocumentStore,
    files: Arc<dyn FileStore>,
    extractor: Arc<dyn TextExtractor>,
}

impl IngestionGateway {
    pub fn new(
        store: DocumentStore,
        files: Arc<dyn FileStore>,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        Self {
            store,
            files,
            extractor,
        }
    }

    /// Reject anything that is not a `.pdf` or `.txt` filename
    pub fn validate(filename: &str) -> Result<FileKind, IngestError> {
        FileKind::from_filename(filename)
            .ok_or_else(|| IngestError::UnsupportedFileType(filename.to_string()))
    }

    /// Full upload path: validate, persist, extract, store
    pub async fn upload(&self, filename: &str, data: &[u8]) -> Result<UploadReceipt, IngestError> {
        let kind = Self::validate(filename)?;
        let id = generate_id();

        let path = self.files.save(&id, filename, data).await?;

        let extractor = Arc::clone(&self.extractor);
        let text = tokio::task::spawn_blocking(move || extractor.extract(&path, kind))
            .await
            .map_err(|e| ExtractError::Join(e.to_string()))??;

        Ok(self.store_document(id, filename, Some(text)))
    }

    /// Store already-extracted text under a freshly generated id.
    ///
    /// `None` content is stored as the empty string.
    pub fn ingest_text(&self, filename: &str, content: Option<String>) -> UploadReceipt {
        self.store_document(generate_id(), filename, content)
    }

    fn store_document(&self, id: String, filename: &str, content: Option<String>) -> UploadReceipt {
        let doc = Document::new(id, filename, content.unwrap_or_default());
        let receipt = UploadReceipt {
            id: doc.id.clone(),
            filename: doc.filename.clone(),
            length: doc.length(),
        };

        self.store.add(doc);

        tracing::info!(
            id = %receipt.id,
            filename = %receipt.filename,
            length = receipt.length,
            "Document stored"
        );

        receipt
    }
}
