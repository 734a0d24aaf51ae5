//! Route modules for Docsearch Server

pub mod documents;
pub mod health;
pub mod search;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(health::router())
        .merge(documents::router(state.config().upload.max_bytes))
        .merge(search::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::extract::FileTextExtractor;
    use crate::storage::LocalFileStore;
    use crate::test_support::{build_pdf, multipart_body};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const BOUNDARY: &str = "docsearch-test-boundary";

    fn test_state(temp_dir: &TempDir) -> AppState {
        AppState::with_components(
            Config::default(),
            Arc::new(LocalFileStore::new(temp_dir.path())),
            Arc::new(FileTextExtractor::new()),
        )
    }

    async fn upload(state: &AppState, field: &str, filename: &str, data: &[u8]) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(multipart_body(BOUNDARY, field, filename, data)))
            .unwrap();

        let response = app(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_root_and_health() {
        let temp_dir = TempDir::new().unwrap();
        let server = TestServer::new(app(test_state(&temp_dir))).unwrap();

        let root = server.get("/").await;
        assert_eq!(root.status_code(), StatusCode::OK);
        assert_eq!(root.json::<Value>()["status"], "ok");

        let health = server.get("/health").await;
        assert_eq!(health.json::<Value>()["status"], "healthy");
    }

    #[tokio::test]
    async fn test_upload_then_get_search_and_list() {
        let temp_dir = TempDir::new().unwrap();
        let state = test_state(&temp_dir);

        let (status, receipt) =
            upload(&state, "file", "report.txt", b"Quarterly results improved").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(receipt["filename"], "report.txt");
        assert_eq!(receipt["length"], 26);
        let id = receipt["id"].as_str().unwrap().to_string();

        let server = TestServer::new(app(state)).unwrap();

        let doc = server.get(&format!("/document/{}", id)).await;
        assert_eq!(doc.status_code(), StatusCode::OK);
        assert_eq!(
            doc.json::<Value>(),
            json!({"id": id, "filename": "report.txt", "content": "Quarterly results improved"})
        );

        let found = server.post("/search").json(&json!({"query": "RESULTS"})).await;
        let body = found.json::<Value>();
        assert_eq!(body["query"], "RESULTS");
        assert_eq!(body["count"], 1);
        assert_eq!(body["results"][0]["id"], id.as_str());
        assert_eq!(body["results"][0]["preview"], "Quarterly results improved");

        let missed = server.post("/search").json(&json!({"query": "xyz"})).await;
        assert_eq!(missed.json::<Value>()["count"], 0);

        let listing = server.get("/documents").await;
        assert_eq!(
            listing.json::<Value>(),
            json!([{"id": id, "filename": "report.txt", "length": 26}])
        );
    }

    #[tokio::test]
    async fn test_get_missing_document() {
        let temp_dir = TempDir::new().unwrap();
        let server = TestServer::new(app(test_state(&temp_dir))).unwrap();

        let response = server.get("/document/missing").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["error"], "not_found");
    }

    #[tokio::test]
    async fn test_upload_unsupported_type() {
        let temp_dir = TempDir::new().unwrap();
        let state = test_state(&temp_dir);

        let (status, body) = upload(&state, "file", "image.png", b"\x89PNG").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "unsupported_file_type");
        assert!(state.store().is_empty());
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_upload_zero_page_pdf() {
        let temp_dir = TempDir::new().unwrap();
        let state = test_state(&temp_dir);

        let (status, receipt) = upload(&state, "file", "empty.pdf", &build_pdf(&[])).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(receipt["length"], 0);
        assert_eq!(state.store().len(), 1);
    }

    #[tokio::test]
    async fn test_upload_corrupt_pdf() {
        let temp_dir = TempDir::new().unwrap();
        let state = test_state(&temp_dir);

        let (status, body) = upload(&state, "file", "broken.pdf", b"not a pdf at all").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "extraction_error");
        assert!(state.store().is_empty());
    }

    #[tokio::test]
    async fn test_upload_without_file_field() {
        let temp_dir = TempDir::new().unwrap();
        let state = test_state(&temp_dir);

        let (status, body) = upload(&state, "attachment", "notes.txt", b"hello").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_blank_search_returns_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let state = test_state(&temp_dir);
        state.gateway().ingest_text("notes.txt", Some("anything".to_string()));

        let server = TestServer::new(app(state)).unwrap();
        let response = server.post("/search").json(&json!({"query": "   "})).await;

        let body = response.json::<Value>();
        assert_eq!(body["query"], "   ");
        assert_eq!(body["count"], 0);
        assert_eq!(body["results"], json!([]));
    }
}
