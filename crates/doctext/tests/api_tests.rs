//! Integration tests for the API module.

#![cfg(feature = "api")]

mod helpers;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use doctext::{
    DoctextError, FetchedDocument, Result, ServerConfig,
    api::{HealthResponse, InfoResponse, create_router},
    fetch::DocumentSource,
};
use helpers::{docx_with_body, legacy_doc_bytes, paragraph, pdf_with_pages};

/// In-memory document host that records the credentials it was given.
#[derive(Default)]
struct FakeSource {
    documents: HashMap<String, (Option<String>, Vec<u8>)>,
    seen_bearers: Mutex<Vec<Option<String>>>,
}

impl FakeSource {
    fn with(mut self, url: &str, content_type: Option<&str>, bytes: Vec<u8>) -> Self {
        self.documents
            .insert(url.to_string(), (content_type.map(str::to_string), bytes));
        self
    }
}

#[async_trait]
impl DocumentSource for FakeSource {
    async fn fetch(&self, url: &str, bearer: Option<&str>) -> Result<FetchedDocument> {
        self.seen_bearers.lock().unwrap().push(bearer.map(str::to_string));
        match self.documents.get(url) {
            Some((content_type, bytes)) => Ok(FetchedDocument {
                url: url.to_string(),
                content_type: content_type.clone(),
                bytes: bytes.clone(),
            }),
            None => Err(DoctextError::fetch_failed(format!("{} returned 404 Not Found", url), Some(404))),
        }
    }
}

fn app(source: FakeSource) -> (Router, Arc<FakeSource>) {
    let source = Arc::new(source);
    let router = create_router(source.clone(), &ServerConfig::default());
    (router, source)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Test the health check endpoint.
#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = app(FakeSource::default());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let health: HealthResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(health.status, "healthy");
    assert!(!health.version.is_empty());
}

/// Test the info endpoint.
#[tokio::test]
async fn test_info_endpoint() {
    let (app, _) = app(FakeSource::default());

    let response = app
        .oneshot(Request::builder().uri("/info").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let info: InfoResponse = serde_json::from_slice(&body).unwrap();

    assert!(!info.version.is_empty());
    assert_eq!(info.supported_formats.len(), 3);
}

#[tokio::test]
async fn test_home_endpoint() {
    let (app, _) = app(FakeSource::default());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "running");
}

#[tokio::test]
async fn test_extract_pdf_from_url() {
    let url = "https://files.example.com/report.pdf";
    let (app, source) = app(FakeSource::default().with(
        url,
        Some("application/pdf"),
        pdf_with_pages(&["Page one", "", "Page three"]),
    ));

    let (status, body) = post_json(app, "/extract", json!({"url": url, "api_key": "secret"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["url"], url);
    assert_eq!(body["format"], "pdf");
    assert_eq!(body["text"], "Page one\n\nPage three");
    assert_eq!(*source.seen_bearers.lock().unwrap(), vec![Some("secret".to_string())]);
}

#[tokio::test]
async fn test_extract_without_api_key_sends_no_bearer() {
    let url = "https://files.example.com/notes";
    let (app, source) = app(FakeSource::default().with(url, Some("text/plain; charset=utf-8"), b"hello".to_vec()));

    let (status, body) = post_json(app, "/extract", json!({"url": url})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "hello");
    assert_eq!(*source.seen_bearers.lock().unwrap(), vec![None]);
}

#[tokio::test]
async fn test_job_description_endpoint() {
    let url = "https://files.example.com/jd.docx?token=abc";
    let (app, _) = app(FakeSource::default().with(
        url,
        Some("application/octet-stream"),
        docx_with_body(&paragraph("Senior Rust Engineer")),
    ));

    let (status, body) = post_json(
        app,
        "/extract-job-description",
        json!({"file_url": url, "api_key": "secret"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"extracted_text": "Senior Rust Engineer"}));
}

#[tokio::test]
async fn test_job_description_requires_api_key() {
    let (app, source) = app(FakeSource::default());

    let (status, body) = post_json(
        app,
        "/extract-job-description",
        json!({"file_url": "https://files.example.com/jd.pdf", "api_key": "  "}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error_type"], "Validation");
    assert!(body.get("error_kind").is_none());
    assert!(source.seen_bearers.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_field_is_bad_request() {
    let (app, _) = app(FakeSource::default());

    let (status, body) = post_json(app, "/extract-job-description", json!({"api_key": "secret"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status_code"], 400);
}

#[tokio::test]
async fn test_fetch_failure_is_bad_gateway() {
    let (app, _) = app(FakeSource::default());

    let (status, body) = post_json(app, "/extract", json!({"url": "https://files.example.com/missing.pdf"})).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error_kind"], "FetchFailed");
    assert_eq!(body["status_code"], 502);
}

#[tokio::test]
async fn test_legacy_doc_is_unsupported_media_type() {
    let url = "https://files.example.com/cv.doc";
    let (app, _) = app(FakeSource::default().with(url, Some("application/msword"), legacy_doc_bytes()));

    let (status, body) = post_json(app, "/extract", json!({"url": url})).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["error_kind"], "UnsupportedFormat");
    assert!(body["message"].as_str().unwrap().contains(".docx or .pdf"));
}

#[tokio::test]
async fn test_blank_document_is_unprocessable() {
    let url = "https://files.example.com/blank.txt";
    let (app, _) = app(FakeSource::default().with(url, None, b"  \n ".to_vec()));

    let (status, body) = post_json(app, "/extract", json!({"url": url})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_kind"], "NoExtractableText");
}

#[tokio::test]
async fn test_unrecognized_is_unsupported_media_type() {
    let url = "https://files.example.com/download";
    let (app, _) = app(FakeSource::default().with(url, Some("image/png"), b"\x89PNG\r\n\x1a\n".to_vec()));

    let (status, body) = post_json(app, "/extract", json!({"url": url})).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["error_kind"], "UnrecognizedFormat");
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let source = Arc::new(FakeSource::default());
    let config = ServerConfig {
        max_request_body_bytes: 64,
        ..ServerConfig::default()
    };
    let app = create_router(source, &config);

    let body = json!({"url": format!("https://files.example.com/{}.pdf", "a".repeat(200))});
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/extract")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
