//! Summarization client for a locally hosted Ollama backend.
//!
//! One synchronous request per summarization unit, no retries, no
//! streaming: the response is awaited in full and returned verbatim.

pub mod pipeline;
mod prompt;

pub use prompt::{
    document_prompt, section_prompt, truncate_chars, DOCUMENT_PROMPT_LIMIT, SECTION_PROMPT_LIMIT,
};

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::BackendConfig;
use crate::models::{DetailLevel, SectionName, SummaryLength};
use crate::utils::HttpClient;

/// Errors from the summarization backend.
///
/// A refused connection is kept distinct from a reachable-but-failing
/// backend so the caller can tell the user to start Ollama rather than
/// report a server error.
#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error(
        "Ollama is not running. Please install and start Ollama:\n\
         1. Download from https://ollama.ai\n\
         2. Install and run Ollama\n\
         3. Run: ollama pull {model}\n\
         4. Ollama will run on http://localhost:11434"
    )]
    BackendUnavailable { model: String },

    #[error("Ollama API error: {status}")]
    BackendStatus { status: u16 },

    #[error("Malformed response from summarization backend: {0}")]
    MalformedResponse(String),

    #[error("Request to summarization backend failed: {0}")]
    Request(String),
}

/// Wire format of the generate request.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    temperature: f32,
}

/// Wire format of the generate response.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

/// Client for the Ollama generate endpoint.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: HttpClient,
    endpoint: String,
    model: String,
    temperature: f32,
}

impl OllamaClient {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            http: HttpClient::with_timeout(Duration::from_secs(config.timeout_secs)),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Issue exactly one generate request and return the backend's text.
    ///
    /// Connection refusal maps to [`SummarizeError::BackendUnavailable`];
    /// a non-success status to [`SummarizeError::BackendStatus`]. The
    /// configured timeout is the only ceiling; there are no retries.
    pub async fn generate(&self, prompt: &str) -> Result<String, SummarizeError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            temperature: self.temperature,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    SummarizeError::BackendUnavailable {
                        model: self.model.clone(),
                    }
                } else {
                    SummarizeError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SummarizeError::BackendStatus {
                status: status.as_u16(),
            });
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .map_err(|e| SummarizeError::MalformedResponse(e.to_string()))?;

        Ok(payload
            .response
            .unwrap_or_else(|| "Could not generate summary".to_string()))
    }

    /// Summarize a whole document at the requested length.
    pub async fn summarize_document_text(
        &self,
        text: &str,
        length: SummaryLength,
    ) -> Result<String, SummarizeError> {
        self.generate(&document_prompt(text, length)).await
    }

    /// Summarize a single section at the requested detail level.
    pub async fn summarize_section(
        &self,
        text: &str,
        section: SectionName,
        level: DetailLevel,
    ) -> Result<String, SummarizeError> {
        self.generate(&section_prompt(text, section, level)).await
    }
}
