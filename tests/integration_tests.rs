//! Integration tests for Paper Summarizer
//!
//! These tests exercise the segmentation pipeline end to end, the
//! summarization client against a simulated backend, and the HTTP
//! boundary through the router.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use paper_summarizer::config::Config;
use paper_summarizer::models::{DetailLevel, SectionName, SummaryLength};
use paper_summarizer::parser::parse_document;
use paper_summarizer::server::{router, AppState};
use paper_summarizer::summarizer::{
    pipeline, truncate_chars, OllamaClient, SummarizeError, DOCUMENT_PROMPT_LIMIT,
};
use tower::util::ServiceExt;

const SYNTHETIC_PAPER: &str = "\
Segmenting Academic Papers With Regular Expressions

Jane Doe and John Smith, authors
jane@example.edu

Abstract
We describe a heuristic that slices papers into sections.

1. Introduction
Papers follow heading conventions that regular expressions can anchor.

3. Results
The heuristic finds most conventional sections.

References
[1] Prior art on text segmentation.
";

fn test_config(upload_dir: &std::path::Path, backend_endpoint: String) -> Config {
    let mut config = Config::default();
    config.uploads.dir = upload_dir.to_path_buf();
    config.backend.endpoint = backend_endpoint;
    config.backend.timeout_secs = 5;
    config
}

fn multipart_request(uri: &str, filename: &str, content: &[u8]) -> Request<Body> {
    let boundary = "X-INTEGRATION-TEST-BOUNDARY";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{filename}\"\r\nContent-Type: application/pdf\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

// ---------------------------------------------------------------------------
// Parsing pipeline
// ---------------------------------------------------------------------------

#[test]
fn test_document_parsing_end_to_end() {
    let document = parse_document(SYNTHETIC_PAPER.to_string());

    assert_eq!(
        document.metadata.title,
        "Segmenting Academic Papers With Regular Expressions"
    );
    assert_eq!(document.metadata.authors.len(), 2);

    assert_eq!(
        document.sections.names(),
        vec![
            SectionName::Abstract,
            SectionName::Introduction,
            SectionName::Results,
            SectionName::References,
        ]
    );
}

#[test]
fn test_section_spans_are_disjoint_and_ordered() {
    let document = parse_document(SYNTHETIC_PAPER.to_string());
    let sections = document.sections.by_offset();

    for section in &sections {
        assert!(section.start < section.end);
    }
    for pair in sections.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
}

#[test]
fn test_unstructured_text_parses_to_empty_sections() {
    let document = parse_document("nothing resembling a paper heading in here".to_string());
    assert!(document.sections.is_empty());
    assert!(document.metadata.authors.is_empty());
}

#[test]
fn test_truncation_only_beyond_limit() {
    let short = "well under the limit";
    assert_eq!(truncate_chars(short, DOCUMENT_PROMPT_LIMIT), short);

    let long = "z".repeat(DOCUMENT_PROMPT_LIMIT * 2);
    assert_eq!(
        truncate_chars(&long, DOCUMENT_PROMPT_LIMIT).chars().count(),
        DOCUMENT_PROMPT_LIMIT
    );
}

// ---------------------------------------------------------------------------
// Summarization backend simulation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_backend_refusal_vs_failure_are_distinct() {
    // Refused connection: nothing listens on port 1.
    let mut config = paper_summarizer::config::BackendConfig::default();
    config.endpoint = "http://127.0.0.1:1/api/generate".to_string();
    config.timeout_secs = 5;
    let refused = OllamaClient::new(&config)
        .generate("prompt")
        .await
        .unwrap_err();
    assert!(matches!(refused, SummarizeError::BackendUnavailable { .. }));

    // Reachable backend returning a failure status.
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/generate")
        .with_status(503)
        .create_async()
        .await;
    let mut config = paper_summarizer::config::BackendConfig::default();
    config.endpoint = format!("{}/api/generate", server.url());
    config.timeout_secs = 5;
    let failing = OllamaClient::new(&config)
        .generate("prompt")
        .await
        .unwrap_err();
    assert!(matches!(
        failing,
        SummarizeError::BackendStatus { status: 503 }
    ));
}

#[tokio::test]
async fn test_pipeline_summarizes_present_sections_only() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"response": "section summary"}"#)
        // Abstract, introduction, results are present among the priority
        // sections; references and the absent ones are skipped.
        .expect(3)
        .create_async()
        .await;

    let mut config = paper_summarizer::config::BackendConfig::default();
    config.endpoint = format!("{}/api/generate", server.url());
    config.timeout_secs = 5;
    let client = OllamaClient::new(&config);

    let document = parse_document(SYNTHETIC_PAPER.to_string());
    let summaries = pipeline::summarize_document(&client, &document, DetailLevel::Technical)
        .await
        .unwrap();

    assert_eq!(summaries.len(), 3);
    assert!(summaries.contains_key(&SectionName::Abstract));
    assert!(summaries.contains_key(&SectionName::Introduction));
    assert!(summaries.contains_key(&SectionName::Results));
    assert!(!summaries.contains_key(&SectionName::References));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_whole_document_summary_uses_length_instruction() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .match_body(mockito::Matcher::PartialJsonString(
            r#"{"model": "orca-mini", "stream": false}"#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"response": "whole-document summary"}"#)
        .create_async()
        .await;

    let mut config = paper_summarizer::config::BackendConfig::default();
    config.endpoint = format!("{}/api/generate", server.url());
    config.timeout_secs = 5;
    let client = OllamaClient::new(&config);

    let summary = client
        .summarize_document_text(SYNTHETIC_PAPER, SummaryLength::Short)
        .await
        .unwrap();
    assert_eq!(summary, "whole-document summary");
    mock.assert_async().await;
}

// ---------------------------------------------------------------------------
// HTTP boundary
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_health_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(test_config(dir.path(), "http://127.0.0.1:1".into())).unwrap();
    let app = router(state);

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_root_lists_features() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(test_config(dir.path(), "http://127.0.0.1:1".into())).unwrap();
    let app = router(state);

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["features"].is_array());
}

#[tokio::test]
async fn test_non_pdf_upload_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(test_config(dir.path(), "http://127.0.0.1:1".into())).unwrap();
    let app = router(state);

    let response = app
        .oneshot(multipart_request("/upload-paper", "notes.txt", b"hello"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn test_summarize_unknown_paper_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(test_config(dir.path(), "http://127.0.0.1:1".into())).unwrap();
    let app = router(state);

    let response = app
        .oneshot(
            Request::post("/summarize")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"paper_id": "never-uploaded"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unextractable_upload_fails_before_any_backend_call() {
    let mut server = mockito::Server::new_async().await;
    // The backend must never be consulted when extraction fails.
    let mock = server
        .mock("POST", "/api/generate")
        .expect(0)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(test_config(
        dir.path(),
        format!("{}/api/generate", server.url()),
    ))
    .unwrap();
    let app = router(state);

    // Valid multipart, .pdf name, but the bytes are not a PDF at all.
    let response = app
        .oneshot(multipart_request(
            "/upload-and-summarize?summary_length=short",
            "broken.pdf",
            b"this is not a pdf document",
        ))
        .await
        .unwrap();

    assert!(
        response.status().is_client_error() || response.status().is_server_error(),
        "expected an extraction failure, got {}",
        response.status()
    );
    mock.assert_async().await;

    // The staged upload must not leak into the upload directory.
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert!(
        leftovers.is_empty(),
        "upload directory should be empty, found {:?}",
        leftovers
    );
}
