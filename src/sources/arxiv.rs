//! arXiv source implementation.

use async_trait::async_trait;
use feed_rs::parser;
use std::path::Path;

use crate::models::Paper;
use crate::sources::{Source, SourceError};
use crate::utils::HttpClient;

/// Base URL for the arXiv query API
const ARXIV_API_URL: &str = "http://export.arxiv.org/api/query";
/// Base URL for arXiv PDFs
const ARXIV_PDF_URL: &str = "https://arxiv.org/pdf";

/// arXiv source: metadata lookup by id, keyword search, PDF download.
#[derive(Debug, Clone)]
pub struct ArxivSource {
    client: HttpClient,
    api_url: String,
    pdf_url: String,
}

impl ArxivSource {
    pub fn new() -> Self {
        Self {
            client: HttpClient::new(),
            api_url: ARXIV_API_URL.to_string(),
            pdf_url: ARXIV_PDF_URL.to_string(),
        }
    }

    /// Create with custom base URLs (for testing).
    #[allow(dead_code)]
    pub fn with_base_urls(api_url: impl Into<String>, pdf_url: impl Into<String>) -> Self {
        Self {
            client: HttpClient::new(),
            api_url: api_url.into(),
            pdf_url: pdf_url.into(),
        }
    }

    /// Parse an arXiv ID from various formats.
    ///
    /// Handles formats like:
    /// - "2301.12345"
    /// - "2301.12345v1" (version is stripped)
    /// - "arxiv:2301.12345"
    /// - "https://arxiv.org/abs/2301.12345v1"
    pub fn parse_id(id: &str) -> Result<String, SourceError> {
        let id = id.trim().to_lowercase();

        if let Some(abs_pos) = id.find("/abs/") {
            let after = &id[abs_pos + 5..];
            let id = after.split('/').next().unwrap_or(after);
            return Ok(id.split('v').next().unwrap_or(id).to_string());
        }

        let id = id.strip_prefix("arxiv:").unwrap_or(&id);

        // Strip version suffix (v1, v2, etc.)
        let id = id.split('v').next().unwrap_or(id);

        if id.is_empty() {
            return Err(SourceError::InvalidRequest("Empty arXiv ID".to_string()));
        }

        Ok(id.to_string())
    }

    async fn query_feed(&self, query_string: &str) -> Result<feed_rs::model::Feed, SourceError> {
        let url = format!("{}?{}", self.api_url, query_string);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/atom+xml")
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to fetch arXiv results: {}", e)))?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "arXiv API returned status: {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read response: {}", e)))?;

        parser::parse(bytes.as_ref())
            .map_err(|e| SourceError::Parse(format!("Failed to parse Atom feed: {}", e)))
    }

    /// Parse an arXiv Atom feed entry into a Paper.
    fn parse_entry(&self, entry: &feed_rs::model::Entry) -> Result<Paper, SourceError> {
        let paper_id = entry
            .id
            .split("/abs/")
            .last()
            .and_then(|s| s.split('v').next())
            .ok_or_else(|| SourceError::Parse("Missing paper ID".to_string()))?
            .to_string();

        let title = entry
            .title
            .as_ref()
            .map(|t| t.content.as_str())
            .unwrap_or("");

        let authors: Vec<String> = entry.authors.iter().map(|a| a.name.clone()).collect();

        let abstract_text = entry
            .summary
            .as_ref()
            .map(|s| s.content.as_str())
            .unwrap_or("");

        let mut paper = Paper::new(paper_id.clone(), title, entry.id.clone());
        paper.authors = authors;
        paper.abstract_text = abstract_text.to_string();
        paper.pdf_url = Some(format!("{}/{}.pdf", self.pdf_url, paper_id));
        paper.published_date = entry.published.map(|d| d.to_rfc3339());

        Ok(paper)
    }
}

impl Default for ArxivSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Source for ArxivSource {
    fn id(&self) -> &str {
        "arxiv"
    }

    fn name(&self) -> &str {
        "arXiv"
    }

    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<Paper>, SourceError> {
        let max_results = max_results.min(200); // arXiv max is 200
        let query_string = format!(
            "search_query={}&max_results={}",
            urlencoding::encode(&format!("all:{}", query)),
            max_results
        );

        let feed = self.query_feed(&query_string).await?;
        feed.entries
            .iter()
            .map(|entry| self.parse_entry(entry))
            .collect()
    }

    async fn fetch(&self, id: &str) -> Result<Paper, SourceError> {
        let paper_id = Self::parse_id(id)?;
        let query_string = format!("id_list={}", urlencoding::encode(&paper_id));

        let feed = self.query_feed(&query_string).await?;
        let entry = feed
            .entries
            .first()
            .ok_or_else(|| SourceError::NotFound(format!("arXiv paper {}", paper_id)))?;

        self.parse_entry(entry)
    }

    async fn download_pdf(&self, id: &str, dest: &Path) -> Result<u64, SourceError> {
        let paper_id = Self::parse_id(id)?;
        let url = format!("{}/{}.pdf", self.pdf_url, paper_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to download arXiv PDF: {}", e)))?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "arXiv returned status {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read arXiv PDF bytes: {}", e)))?;

        if bytes.len() < 4 || &bytes[0..4] != b"%PDF" {
            return Err(SourceError::Parse(
                "arXiv response is not a valid PDF".to_string(),
            ));
        }

        tokio::fs::write(dest, &bytes).await?;
        Ok(bytes.len() as u64)
    }
}
