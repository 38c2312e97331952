//! PDF text extraction utilities.
//!
//! Text extraction is delegated to the pdf-extract crate (poppler-backed);
//! page counting uses lopdf directly. Extraction that produces no visible
//! text at all is treated as a failure, so callers never hand an empty
//! document to the summarization pipeline.

use std::path::Path;
use thiserror::Error;

/// Errors that can occur during PDF extraction.
#[derive(Debug, Error)]
pub enum PdfExtractError {
    #[error("Failed to extract text from PDF: {0}")]
    ExtractionFailed(String),

    #[error("Could not extract text from PDF: document contains no extractable text")]
    EmptyText,

    #[error("File not found or not a valid PDF: {0}")]
    InvalidFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extract the concatenated text of all pages, in page order.
///
/// Fails with [`PdfExtractError::EmptyText`] when the extractor succeeds
/// but produces only whitespace (scanned or image-only PDFs).
pub fn extract_text(path: &Path) -> Result<String, PdfExtractError> {
    if !path.exists() {
        return Err(PdfExtractError::InvalidFile(format!(
            "File not found: {}",
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(PdfExtractError::InvalidFile(format!(
            "Not a file: {}",
            path.display()
        )));
    }

    let text = pdf_extract::extract_text(path)
        .map_err(|e| PdfExtractError::ExtractionFailed(e.to_string()))?;

    require_text(text)
}

/// Reject extraction output that contains no visible characters.
pub(crate) fn require_text(text: String) -> Result<String, PdfExtractError> {
    if text.trim().is_empty() {
        tracing::debug!("extraction produced only whitespace");
        return Err(PdfExtractError::EmptyText);
    }
    Ok(text)
}

/// Number of pages in the PDF.
pub fn page_count(path: &Path) -> Result<usize, PdfExtractError> {
    let document = lopdf::Document::load(path)
        .map_err(|e| PdfExtractError::InvalidFile(e.to_string()))?;
    Ok(document.get_pages().len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_nonexistent_file() {
        let result = extract_text(Path::new("/nonexistent/file.pdf"));
        assert!(matches!(result, Err(PdfExtractError::InvalidFile(_))));
    }

    #[test]
    fn test_require_text_rejects_whitespace() {
        assert!(matches!(
            require_text("   \n\t \n".to_string()),
            Err(PdfExtractError::EmptyText)
        ));
        assert!(matches!(
            require_text(String::new()),
            Err(PdfExtractError::EmptyText)
        ));
    }

    #[test]
    fn test_require_text_passes_content_through() {
        let text = "actual paper content".to_string();
        assert_eq!(require_text(text.clone()).unwrap(), text);
    }

    #[test]
    fn test_page_count_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-pdf.pdf");
        std::fs::write(&path, b"plain text, not a pdf").unwrap();
        assert!(page_count(&path).is_err());
    }
}
