//! Search API routes
//!
//! Case-insensitive substring search over filenames and extracted content.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::document::SearchHit;
use crate::state::AppState;

/// Create the search router
pub fn router() -> Router<AppState> {
    Router::new().route("/search", post(search_documents))
}

/// Search request body
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Query exactly as submitted
    pub query: String,
    pub count: usize,
    pub results: Vec<SearchHit>,
}

/// POST /search {"query": "..."}
async fn search_documents(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let results: Vec<SearchHit> = state
        .store()
        .search(&request.query)
        .iter()
        .map(SearchHit::from)
        .collect();

    tracing::debug!(query = %request.query, count = results.len(), "Search complete");

    Json(SearchResponse {
        query: request.query,
        count: results.len(),
        results,
    })
}
