//! Local filesystem upload storage

use std::path::{Path, PathBuf};

use super::{FileStore, StorageError};

/// Writes uploads as `{id}_{basename}` under a base directory
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    base_path: PathBuf,
}

impl LocalFileStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Create the base directory if it does not exist
    pub async fn ensure_dir(&self) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.base_path)
            .await
            .map_err(|source| StorageError::CreateDir {
                path: self.base_path.clone(),
                source,
            })
    }

    /// Target path for an upload; directory components of the client
    /// filename are discarded
    pub fn path_for(&self, id: &str, filename: &str) -> PathBuf {
        let basename = Path::new(filename)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload");
        self.base_path.join(format!("{}_{}", id, basename))
    }
}

#[async_trait::async_trait]
impl FileStore for LocalFileStore {
    async fn save(&self, id: &str, filename: &str, data: &[u8]) -> Result<PathBuf, StorageError> {
        let path = self.path_for(id, filename);

        tokio::fs::write(&path, data)
            .await
            .map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), size = data.len(), "Upload persisted");
        Ok(path)
    }
}
