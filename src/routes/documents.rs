//! Document endpoints
//!
//! - POST /upload - Upload a PDF or TXT file (multipart field `file`)
//! - GET /document/:id - Full document with extracted content
//! - GET /documents - Summary of every stored document

use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::document::{Document, DocumentSummary};
use crate::error::{AppError, Result};
use crate::ingest::UploadReceipt;
use crate::state::AppState;

/// Multipart field names accepted for the uploaded file
const FILE_FIELDS: &[&str] = &["file", "document"];

/// Create the documents router
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/upload",
            post(upload_document).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/document/:id", get(get_document))
        .route("/documents", get(list_documents))
}

/// Upload a new document
async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadReceipt>> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read upload: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();
        if !FILE_FIELDS.contains(&name.as_str()) {
            tracing::debug!(field = %name, "Skipping multipart field");
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();

        let data = field.bytes().await.map_err(|e| {
            tracing::warn!("Failed to read file data: {}", e);
            AppError::BadRequest(format!("Failed to read file data: {}", e))
        })?;

        tracing::debug!(filename = %filename, size = data.len(), "Received upload");

        let receipt = state.gateway().upload(&filename, &data).await?;
        return Ok(Json(receipt));
    }

    tracing::warn!("No file field found in multipart upload");
    Err(AppError::BadRequest(
        "No file provided. Use field name 'file'".to_string(),
    ))
}

/// Get document by ID
async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document>> {
    state.store().get(&id).map(Json).ok_or_else(|| {
        tracing::debug!(id = %id, "Document not found");
        AppError::NotFound("Document not found".to_string())
    })
}

/// List all stored documents
async fn list_documents(State(state): State<AppState>) -> Json<Vec<DocumentSummary>> {
    let summaries = state
        .store()
        .all()
        .iter()
        .map(DocumentSummary::from)
        .collect();

    Json(summaries)
}
