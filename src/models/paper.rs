//! Paper models: parsed documents, heuristic metadata, and remote paper
//! records returned by the arXiv source.

use serde::{Deserialize, Serialize};

use super::section::SectionMap;

/// Heuristically extracted document metadata.
///
/// Both fields may be empty: the extractor never fails, it just finds
/// nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// First sufficiently long line of the document, or empty.
    pub title: String,
    /// Lines that look like author/affiliation lines, in document order.
    /// Duplicates are allowed.
    pub authors: Vec<String>,
}

/// A parsed document: the full extracted text plus everything the
/// heuristics found in it.
///
/// Documents are built once from an extraction result, are immutable
/// afterwards, and live only for the duration of a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Concatenated extracted text of all pages, in page order.
    pub text: String,
    /// Sections discovered by heading-pattern matching.
    pub sections: SectionMap,
    /// Title/author heuristics over the opening lines.
    pub metadata: Metadata,
}

impl Document {
    pub fn new(text: String, sections: SectionMap, metadata: Metadata) -> Self {
        Self {
            text,
            sections,
            metadata,
        }
    }
}

/// A paper record from a remote source (arXiv).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    /// Source-specific identifier (e.g. "2301.12345").
    pub paper_id: String,
    pub title: String,
    /// Author names in the order the source lists them.
    pub authors: Vec<String>,
    /// Abstract as provided by the source, not the segmenter.
    pub abstract_text: String,
    /// Canonical paper page URL.
    pub url: String,
    /// Direct PDF URL, when the source provides one.
    pub pdf_url: Option<String>,
    /// Publication date in RFC 3339, when known.
    pub published_date: Option<String>,
}

impl Paper {
    pub fn new(
        paper_id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            paper_id: paper_id.into(),
            title: title.into(),
            authors: Vec::new(),
            abstract_text: String::new(),
            url: url.into(),
            pdf_url: None,
            published_date: None,
        }
    }
}

/// A related-work suggestion derived from a keyword search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedPaper {
    pub title: String,
    pub authors: Vec<String>,
    pub arxiv_id: String,
}
