//! Remote paper sources.
//!
//! The [`Source`] trait is the seam between the summarization pipeline
//! and whatever repository papers are fetched from. The service ships
//! with an arXiv implementation; tests substitute their own.

mod arxiv;

pub use arxiv::ArxivSource;

use async_trait::async_trait;
use std::path::Path;

use crate::models::Paper;

/// Interface to a remote preprint repository.
#[async_trait]
pub trait Source: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this source (e.g. "arxiv").
    fn id(&self) -> &str;

    /// Human-readable name of this source.
    fn name(&self) -> &str;

    /// Search for papers matching a free-text query.
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<Paper>, SourceError>;

    /// Fetch a single paper's metadata by source-specific id.
    async fn fetch(&self, id: &str) -> Result<Paper, SourceError>;

    /// Download a paper's PDF to `dest`, returning the byte count.
    async fn download_pdf(&self, id: &str, dest: &Path) -> Result<u64, SourceError>;
}

/// Errors that can occur when interacting with a source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Parsing error (Atom feed, payload shape)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Paper not found
    #[error("Paper not found: {0}")]
    NotFound(String),

    /// API error from the source
    #[error("API error: {0}")]
    Api(String),

    /// IO error (file system)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(format!("JSON: {}", err))
    }
}
