//! Plain-text extraction from uploaded files
//!
//! The ingestion path only talks to the [`TextExtractor`] trait; the default
//! [`FileTextExtractor`] reads PDFs with `lopdf` and text files as lossy UTF-8.

mod error;
mod extractor;
mod kind;

pub use error::{ExtractError, Result};
pub use extractor::{FileTextExtractor, TextExtractor};
pub use kind::FileKind;
