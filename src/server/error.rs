//! API error type and its mapping to transport-level status codes.
//!
//! The core surfaces one descriptive message per failure; this layer only
//! decides the status code. Nothing is retried here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::sources::SourceError;
use crate::store::StoreError;
use crate::summarizer::SummarizeError;
use crate::utils::PdfExtractError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Extraction(#[from] PdfExtractError),

    #[error(transparent)]
    Summarize(#[from] SummarizeError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,

            // Empty extraction is the caller's document, not our fault;
            // extractor breakage is ours.
            ApiError::Extraction(PdfExtractError::EmptyText) => StatusCode::BAD_REQUEST,
            ApiError::Extraction(PdfExtractError::InvalidFile(_)) => StatusCode::BAD_REQUEST,
            ApiError::Extraction(_) => StatusCode::INTERNAL_SERVER_ERROR,

            ApiError::Summarize(SummarizeError::BackendUnavailable { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::Summarize(_) => StatusCode::BAD_GATEWAY,

            ApiError::Source(SourceError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Source(SourceError::InvalidRequest(_)) => StatusCode::BAD_REQUEST,
            ApiError::Source(_) => StatusCode::BAD_GATEWAY,

            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        } else {
            tracing::debug!(%status, error = %self, "request rejected");
        }

        let body = Json(json!({
            "status": "error",
            "detail": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_errors_are_distinguishable() {
        let unavailable = ApiError::Summarize(SummarizeError::BackendUnavailable {
            model: "orca-mini".to_string(),
        });
        let failing = ApiError::Summarize(SummarizeError::BackendStatus { status: 500 });

        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(failing.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::Store(StoreError::NotFound("nope".to_string()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_empty_extraction_maps_to_400() {
        let err = ApiError::Extraction(PdfExtractError::EmptyText);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
