//! Thread-safe document store
//!
//! A single lock guards both the id index and the ordered entries, so an
//! insert is visible to readers either completely or not at all.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::types::Document;

/// Shared handle to the process-wide document collection
#[derive(Clone, Default)]
pub struct DocumentStore {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    /// Documents in insertion order
    entries: Vec<Document>,
    /// id -> position in `entries`
    index: HashMap<String, usize>,
}

impl DocumentStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document keyed by its id.
    ///
    /// An existing document with the same id is replaced in place.
    pub fn add(&self, doc: Document) {
        let mut inner = self.inner.write();
        match inner.index.get(&doc.id).copied() {
            Some(position) => {
                tracing::debug!(id = %doc.id, "Replacing existing document");
                inner.entries[position] = doc;
            }
            None => {
                let position = inner.entries.len();
                inner.index.insert(doc.id.clone(), position);
                inner.entries.push(doc);
            }
        }
    }

    /// Exact-key lookup
    pub fn get(&self, id: &str) -> Option<Document> {
        let inner = self.inner.read();
        inner
            .index
            .get(id)
            .map(|&position| inner.entries[position].clone())
    }

    /// Snapshot of every stored document in insertion order
    pub fn all(&self) -> Vec<Document> {
        self.inner.read().entries.clone()
    }

    /// Case-insensitive substring search over content and filename.
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<Document> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let inner = self.inner.read();
        inner
            .entries
            .iter()
            .filter(|doc| doc.matches(&needle))
            .cloned()
            .collect()
    }

    /// Number of distinct ids stored
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }
}
