//! Input validation for paper ids and upload filenames.
//!
//! Both values end up in filesystem paths under the upload directory, so
//! they are checked against path traversal before use.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid paper ID: {0}")]
    InvalidPaperId(String),

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("Path traversal detected: {0}")]
    PathTraversal(String),
}

/// Validate a paper id before it is joined onto the upload directory.
///
/// Ids come from uploaded filenames or arXiv identifiers, so dots and
/// hyphens are expected; separators and traversal sequences are not.
pub fn sanitize_paper_id(id: &str) -> Result<String, ValidationError> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::InvalidPaperId("empty ID".to_string()));
    }

    if id.contains("..") {
        return Err(ValidationError::PathTraversal(id.to_string()));
    }

    if id.contains('/') || id.contains('\\') || id.contains('\0') {
        return Err(ValidationError::InvalidPaperId(
            "contains path separators or null bytes".to_string(),
        ));
    }

    Ok(id.to_string())
}

/// Validate an uploaded filename and require the `.pdf` extension.
pub fn sanitize_pdf_filename(filename: &str) -> Result<String, ValidationError> {
    let filename = filename.trim();

    if filename.is_empty() {
        return Err(ValidationError::InvalidFilename("empty filename".to_string()));
    }

    if filename.contains("..") || filename.starts_with('/') || filename.starts_with('\\') {
        return Err(ValidationError::PathTraversal(filename.to_string()));
    }

    if filename.contains('/') || filename.contains('\\') || filename.contains('\0') {
        return Err(ValidationError::InvalidFilename(
            "contains path separators or null bytes".to_string(),
        ));
    }

    if !filename.ends_with(".pdf") {
        return Err(ValidationError::InvalidFilename(
            "Only PDF files are allowed".to_string(),
        ));
    }

    Ok(filename.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_paper_id_valid() {
        assert!(sanitize_paper_id("2301.12345").is_ok());
        assert!(sanitize_paper_id("my_paper-v2").is_ok());
    }

    #[test]
    fn test_sanitize_paper_id_rejects_traversal() {
        assert!(sanitize_paper_id("../etc/passwd").is_err());
        assert!(sanitize_paper_id("foo/bar").is_err());
        assert!(sanitize_paper_id("").is_err());
    }

    #[test]
    fn test_sanitize_pdf_filename() {
        assert_eq!(sanitize_pdf_filename("paper.pdf").unwrap(), "paper.pdf");
        assert!(sanitize_pdf_filename("paper.txt").is_err());
        assert!(sanitize_pdf_filename("../paper.pdf").is_err());
        assert!(sanitize_pdf_filename("dir/paper.pdf").is_err());
        assert!(sanitize_pdf_filename("").is_err());
    }
}
