//! Text extractor trait and the default file-based implementation

use std::path::Path;

use lopdf::Document as PdfDocument;

use super::error::{ExtractError, Result};
use super::kind::FileKind;

/// Converts a persisted upload into plain text.
///
/// Implementations may return empty text; that is not an error.
pub trait TextExtractor: Send + Sync {
    /// Concatenated page texts of a PDF, in page order
    fn extract_pdf(&self, path: &Path) -> Result<String>;

    /// UTF-8 text file contents
    fn extract_txt(&self, path: &Path) -> Result<String>;

    /// Dispatch on the detected file kind
    fn extract(&self, path: &Path, kind: FileKind) -> Result<String> {
        match kind {
            FileKind::Pdf => self.extract_pdf(path),
            FileKind::Txt => self.extract_txt(path),
        }
    }
}

/// Reads files from disk; PDFs through `lopdf`
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTextExtractor;

impl FileTextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract text from in-memory PDF bytes
    pub fn pdf_text_from_bytes(data: &[u8]) -> Result<String> {
        let doc = PdfDocument::load_mem(data).map_err(|e| ExtractError::PdfLoad(e.to_string()))?;
        pdf_text(&doc)
    }

    /// Decode bytes as UTF-8, dropping invalid sequences
    pub fn decode_utf8_lossy(data: &[u8]) -> String {
        data.utf8_chunks().map(|chunk| chunk.valid()).collect()
    }
}

impl TextExtractor for FileTextExtractor {
    fn extract_pdf(&self, path: &Path) -> Result<String> {
        let doc = PdfDocument::load(path).map_err(|e| ExtractError::PdfLoad(e.to_string()))?;
        pdf_text(&doc)
    }

    fn extract_txt(&self, path: &Path) -> Result<String> {
        let data = std::fs::read(path)?;
        Ok(Self::decode_utf8_lossy(&data))
    }
}

/// Join page texts with a single newline, then trim the whole result
fn pdf_text(doc: &PdfDocument) -> Result<String> {
    let pages = doc.get_pages();
    let mut texts = Vec::with_capacity(pages.len());

    // BTreeMap keys are page numbers, so iteration is already in page order
    for &page in pages.keys() {
        let text = doc
            .extract_text(&[page])
            .map_err(|e| ExtractError::PdfPage {
                page,
                message: e.to_string(),
            })?;
        // lopdf terminates every text object with '\n'
        texts.push(text.trim_end_matches(['\r', '\n']).to_string());
    }

    tracing::debug!(pages = texts.len(), "Extracted PDF text");

    Ok(texts.join("\n").trim().to_string())
}
