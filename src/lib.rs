//! # Paper Summarizer
//!
//! An HTTP service and CLI for section-aware summarization of academic
//! papers using a locally hosted Ollama backend.
//!
//! ## Architecture
//!
//! - [`models`]: Core data structures (Document, Section, SummaryRequest, etc.)
//! - [`parser`]: Heading-pattern segmentation, metadata and figure heuristics
//! - [`summarizer`]: Ollama client, prompt construction, per-section pipeline
//! - [`sources`]: Remote paper sources (arXiv) behind the [`sources::Source`] trait
//! - [`store`]: Transient upload storage with guaranteed cleanup
//! - [`server`]: Axum HTTP boundary
//! - [`utils`]: PDF extraction, HTTP client, input validation
//! - [`config`]: Configuration management

pub mod config;
pub mod models;
pub mod parser;
pub mod server;
pub mod sources;
pub mod store;
pub mod summarizer;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use models::{Document, SectionName};
pub use sources::{ArxivSource, Source};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
