//! Utility modules: HTTP client, PDF extraction, and input validation.

mod http;
mod pdf;
mod validate;

pub use http::HttpClient;
pub use pdf::{extract_text, page_count, PdfExtractError};
pub use validate::{sanitize_paper_id, sanitize_pdf_filename, ValidationError};
