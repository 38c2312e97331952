//! Title and author heuristics over the opening lines of a document.

use crate::models::Metadata;

/// How many leading lines are scanned for metadata.
const SCAN_LINES: usize = 20;

/// Minimum trimmed length (exclusive) for a line to qualify.
const MIN_LINE_CHARS: usize = 10;

/// Extract a best-effort title and author lines from the document text.
///
/// The first qualifying line (non-blank, more than 10 characters after
/// trimming) becomes the title; later qualifying lines never replace it.
/// Every qualifying line, the title line included, is independently
/// checked for author markers ("author" in any case, or an "@" as found
/// in contact emails) and appended to the author list at most once per
/// line, duplicates across lines allowed.
///
/// Never fails: a document with no qualifying lines yields empty metadata.
pub fn extract_metadata(text: &str) -> Metadata {
    let mut title = String::new();
    let mut authors = Vec::new();

    for line in text.lines().take(SCAN_LINES) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.chars().count() <= MIN_LINE_CHARS {
            continue;
        }

        if title.is_empty() {
            title = trimmed.to_string();
        }

        if trimmed.to_lowercase().contains("author") || trimmed.contains('@') {
            authors.push(trimmed.to_string());
        }
    }

    Metadata { title, authors }
}
