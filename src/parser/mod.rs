//! Heuristic parsing of extracted paper text: section segmentation,
//! metadata extraction, and figure references.

mod figures;
mod metadata;
mod segment;

pub use figures::extract_key_figures;
pub use metadata::extract_metadata;
pub use segment::segment;

use crate::models::Document;

/// Run all parsing heuristics over extracted text and assemble a
/// [`Document`]. Parsing itself never fails; emptiness of the text is the
/// extractor's concern.
pub fn parse_document(text: String) -> Document {
    let sections = segment(&text);
    let metadata = extract_metadata(&text);
    Document::new(text, sections, metadata)
}
