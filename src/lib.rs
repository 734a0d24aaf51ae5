//! Docsearch Server Library
//!
//! Upload PDF/TXT files, extract their text and search it in memory.
//! The server binary is in main.rs.
//!
//! # Modules
//!
//! - `document`: In-memory document store and substring search
//! - `extract`: Text extraction for PDF and TXT uploads
//! - `storage`: Raw upload persistence
//! - `ingest`: Upload validation and the ingestion pipeline
//! - `routes`: HTTP endpoints

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod routes;
pub mod state;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_support;
