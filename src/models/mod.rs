//! Core data models for parsed papers and summary operations.

mod paper;
mod section;
mod summary;

pub use paper::{Document, Metadata, Paper, RelatedPaper};
pub use section::{Section, SectionMap, SectionName};
pub use summary::{DetailLevel, SummaryLength, SummaryRequest};
