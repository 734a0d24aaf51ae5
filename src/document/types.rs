//! Document types

use serde::{Deserialize, Serialize};

/// Number of content characters included in a search preview
pub const PREVIEW_CHARS: usize = 300;

/// One uploaded file's extracted text plus its identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Opaque unique token assigned at upload time
    pub id: String,
    /// Original client-supplied filename
    pub filename: String,
    /// Extracted plain text (may be empty)
    pub content: String,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        filename: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// Content length in characters
    pub fn length(&self) -> usize {
        self.content.chars().count()
    }

    /// Leading `PREVIEW_CHARS` characters of the content
    pub fn preview(&self) -> &str {
        match self.content.char_indices().nth(PREVIEW_CHARS) {
            Some((end, _)) => &self.content[..end],
            None => &self.content,
        }
    }

    /// Case-insensitive containment test against content and filename.
    ///
    /// `needle` must already be lower-cased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.content.to_lowercase().contains(needle)
            || self.filename.to_lowercase().contains(needle)
    }
}

/// Listing entry for a stored document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: String,
    pub filename: String,
    pub length: usize,
}

impl From<&Document> for DocumentSummary {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            filename: doc.filename.clone(),
            length: doc.length(),
        }
    }
}

/// Individual search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub filename: String,
    pub preview: String,
}

impl From<&Document> for SearchHit {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            filename: doc.filename.clone(),
            preview: doc.preview().to_string(),
        }
    }
}
