//! Request handlers: thin plumbing over the extraction, parsing, and
//! summarization components.

use axum::extract::{Multipart, Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::models::{Document, SummaryLength, SummaryRequest};
use crate::parser::{extract_key_figures, parse_document};
use crate::summarizer::pipeline;
use crate::utils::{extract_text, page_count, sanitize_pdf_filename};

use super::error::ApiError;
use super::AppState;

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Academic Paper Summarizer",
        "features": [
            "Section-aware parsing",
            "Multi-level summaries (ELI5, technical, expert)",
            "arXiv integration",
            "Figure extraction",
            "Methodology recreation",
            "Related work suggestions",
        ],
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

#[derive(Debug, Deserialize)]
pub struct SummaryLengthParams {
    #[serde(default)]
    summary_length: String,
}

/// Upload a PDF and summarize the whole document in one round trip.
///
/// The upload is staged in a temporary file that is removed on every exit
/// path, success and error alike.
pub async fn upload_and_summarize(
    State(state): State<AppState>,
    Query(params): Query<SummaryLengthParams>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let (filename, bytes) = read_pdf_upload(&mut multipart).await?;

    let staged = state.store.stage(&bytes)?;
    let text = extract_text(staged.path())?;

    let length = SummaryLength::parse_or_default(&params.summary_length);
    let summary = state.ollama.summarize_document_text(&text, length).await?;

    Ok(Json(json!({
        "status": "success",
        "filename": filename,
        "text_length": text.chars().count(),
        "summary": summary,
    })))
}

/// Upload and parse a paper, keeping the file for later requests.
pub async fn upload_paper(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let (filename, bytes) = read_pdf_upload(&mut multipart).await?;
    let paper_id = filename
        .strip_suffix(".pdf")
        .unwrap_or(&filename)
        .to_string();

    let stored = state.store.store(&paper_id, &bytes)?;

    let result = parse_stored_upload(&paper_id, &stored);
    if result.is_err() {
        // Do not keep papers we could not parse.
        let _ = state.store.remove(&paper_id);
    }
    result
}

fn parse_stored_upload(paper_id: &str, stored: &std::path::Path) -> Result<Json<Value>, ApiError> {
    let text = extract_text(stored)?;
    let pages = page_count(stored)?;
    let document = parse_document(text);

    Ok(Json(json!({
        "status": "success",
        "paper_id": paper_id,
        "title": document.metadata.title,
        "authors": document.metadata.authors,
        "sections": document.sections.names(),
        "figures": extract_key_figures(&document.text),
        "text_length": document.text.chars().count(),
        "page_count": pages,
    })))
}

#[derive(Debug, Deserialize)]
pub struct ArxivParams {
    arxiv_id: String,
}

/// Fetch a paper from arXiv, download its PDF into the store, and parse it.
pub async fn arxiv_paper(
    State(state): State<AppState>,
    Query(params): Query<ArxivParams>,
) -> Result<Json<Value>, ApiError> {
    let paper = state.source.fetch(&params.arxiv_id).await?;

    let dest = state.store.path_for_id(&paper.paper_id)?;
    state.source.download_pdf(&paper.paper_id, &dest).await?;

    let result = parse_fetched_paper(&state, &paper, &dest);
    if result.is_err() {
        let _ = state.store.remove(&paper.paper_id);
    }
    result
}

fn parse_fetched_paper(
    state: &AppState,
    paper: &crate::models::Paper,
    dest: &std::path::Path,
) -> Result<Json<Value>, ApiError> {
    let text = extract_text(dest)?;
    let document = parse_document(text);

    Ok(Json(json!({
        "status": "success",
        "paper_id": paper.paper_id,
        "title": paper.title,
        "authors": paper.authors,
        "abstract": paper.abstract_text,
        "sections": document.sections.names(),
        "source": state.source.id(),
        "url": paper.url,
    })))
}

/// Generate per-section summaries for a stored paper.
pub async fn summarize_paper(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<Value>, ApiError> {
    let document = load_stored_document(&state, &request.paper_id)?;
    let level = request.level();

    let summaries = pipeline::summarize_document(&state.ollama, &document, level).await?;

    let mut body = json!({
        "status": "success",
        "paper_id": request.paper_id,
        "summary_level": level.as_str(),
        "summaries": summaries,
    });

    if request.include_figures {
        body["figures"] = json!(extract_key_figures(&document.text));
    }

    if request.include_methodology {
        body["methodology"] = json!(pipeline::recreate_methodology(&state.ollama, &document).await?);
    }

    Ok(Json(body))
}

/// Suggest related papers for a stored paper. Remote search failures are
/// swallowed into an empty list.
pub async fn related_work(
    State(state): State<AppState>,
    Path(paper_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let document = load_stored_document(&state, &paper_id)?;
    let related = pipeline::suggest_related_work(state.source.as_ref(), &document).await;

    Ok(Json(json!({
        "status": "success",
        "paper_id": paper_id,
        "related_papers": related,
    })))
}

/// Resolve a stored paper and re-run extraction and parsing over it.
fn load_stored_document(state: &AppState, paper_id: &str) -> Result<Document, ApiError> {
    let path = state.store.resolve(paper_id)?;
    let text = extract_text(&path)?;
    Ok(parse_document(text))
}

/// Pull the PDF file field out of a multipart upload.
async fn read_pdf_upload(multipart: &mut Multipart) -> Result<(String, Vec<u8>), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidRequest(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let filename = sanitize_pdf_filename(&filename)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::InvalidRequest(format!("Failed to read upload: {}", e)))?;

        return Ok((filename, bytes.to_vec()));
    }

    Err(ApiError::InvalidRequest(
        "Missing 'file' field in multipart body".to_string(),
    ))
}
