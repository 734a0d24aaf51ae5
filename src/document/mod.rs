//! In-memory document store
//!
//! Holds every extracted document for the lifetime of the process and
//! answers point lookups, full listings and substring searches.
//!
//! # Usage
//!
//! ```rust
//! use docsearch_server::document::{Document, DocumentStore};
//!
//! let store = DocumentStore::new();
//! store.add(Document::new("1", "report.txt", "Quarterly results improved"));
//!
//! let hits = store.search("RESULTS");
//! assert_eq!(hits.len(), 1);
//! assert!(store.get("missing").is_none());
//! ```

mod store;
mod types;

pub use store::DocumentStore;
pub use types::{Document, DocumentSummary, SearchHit, PREVIEW_CHARS};
