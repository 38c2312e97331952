//! Summary request models and the closed detail-level enumerations.

use serde::{Deserialize, Serialize};

/// Verbosity of a whole-document summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    Medium,
    Long,
}

impl SummaryLength {
    /// Instruction sentence embedded into the whole-document prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            SummaryLength::Short => "Provide a concise summary in 2-3 paragraphs.",
            SummaryLength::Medium => "Provide a comprehensive summary in 4-6 paragraphs.",
            SummaryLength::Long => {
                "Provide a detailed summary in 8-10 paragraphs with key findings and conclusions."
            }
        }
    }

    /// Lenient parse used at the request boundary: unknown or missing
    /// values fall back to `Medium`.
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "short" => SummaryLength::Short,
            "long" => SummaryLength::Long,
            _ => SummaryLength::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Medium => "medium",
            SummaryLength::Long => "long",
        }
    }
}

impl Default for SummaryLength {
    fn default() -> Self {
        SummaryLength::Medium
    }
}

/// Audience of a per-section summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    Eli5,
    Technical,
    Expert,
}

impl DetailLevel {
    /// Lenient parse used at the request boundary: unknown or missing
    /// values fall back to `Technical`.
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "eli5" => DetailLevel::Eli5,
            "expert" => DetailLevel::Expert,
            _ => DetailLevel::Technical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DetailLevel::Eli5 => "eli5",
            DetailLevel::Technical => "technical",
            DetailLevel::Expert => "expert",
        }
    }
}

impl Default for DetailLevel {
    fn default() -> Self {
        DetailLevel::Technical
    }
}

/// Request body for the section-aware summarize operation.
///
/// `summary_level` is accepted as a free string and parsed leniently so an
/// unknown level degrades to the documented default instead of rejecting
/// the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub paper_id: String,

    #[serde(default)]
    pub summary_level: String,

    #[serde(default)]
    pub include_figures: bool,

    #[serde(default = "default_include_methodology")]
    pub include_methodology: bool,
}

fn default_include_methodology() -> bool {
    true
}

impl SummaryRequest {
    pub fn level(&self) -> DetailLevel {
        DetailLevel::parse_or_default(&self.summary_level)
    }
}
