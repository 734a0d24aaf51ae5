//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::document::DocumentStore;
use crate::extract::{FileTextExtractor, TextExtractor};
use crate::ingest::IngestionGateway;
use crate::storage::{FileStore, LocalFileStore, StorageError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    store: DocumentStore,
    gateway: IngestionGateway,
}

impl AppState {
    /// Create the production state: local upload directory plus the
    /// lopdf-backed extractor.
    ///
    /// Creates the upload directory if it does not exist.
    pub async fn new(config: Config) -> Result<Self, StorageError> {
        let files = LocalFileStore::new(config.upload.dir.clone());
        files.ensure_dir().await?;

        Ok(Self::with_components(
            config,
            Arc::new(files),
            Arc::new(FileTextExtractor::new()),
        ))
    }

    /// Create state around injected collaborators
    pub fn with_components(
        config: Config,
        files: Arc<dyn FileStore>,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        let store = DocumentStore::new();
        let gateway = IngestionGateway::new(store.clone(), files, extractor);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                gateway,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the document store
    pub fn store(&self) -> &DocumentStore {
        &self.inner.store
    }

    /// Get the ingestion gateway
    pub fn gateway(&self) -> &IngestionGateway {
        &self.inner.gateway
    }
}
