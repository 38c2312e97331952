//! Prompt construction for the summarization backend.
//!
//! Input text is hard-truncated before being embedded: content beyond the
//! limit is silently dropped, not summarized. Limits are counted in
//! characters and cut on a char boundary.

use crate::models::{DetailLevel, SectionName, SummaryLength};

/// Character limit for whole-document prompts.
pub const DOCUMENT_PROMPT_LIMIT: usize = 3000;

/// Character limit for per-section prompts.
pub const SECTION_PROMPT_LIMIT: usize = 2000;

/// Truncate to at most `max_chars` characters. Shorter input is returned
/// unmodified.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

/// Instruction prompt for a whole-document summary.
pub fn document_prompt(text: &str, length: SummaryLength) -> String {
    format!(
        "Please summarize the following academic paper. {}\n\n\
         Focus on:\n\
         - Main research question/objective\n\
         - Methodology\n\
         - Key findings\n\
         - Conclusions and implications\n\n\
         Paper content:\n{}",
        length.instruction(),
        truncate_chars(text, DOCUMENT_PROMPT_LIMIT)
    )
}

/// Instruction prompt for a single section at the requested detail level.
pub fn section_prompt(text: &str, section: SectionName, level: DetailLevel) -> String {
    let excerpt = truncate_chars(text, SECTION_PROMPT_LIMIT);
    match level {
        DetailLevel::Eli5 => format!(
            "Explain this {section} section in simple terms a 5-year-old could understand:\n{excerpt}"
        ),
        DetailLevel::Technical => {
            format!("Provide a technical summary of this {section} section:\n{excerpt}")
        }
        DetailLevel::Expert => {
            format!("Provide an expert-level analysis of this {section} section:\n{excerpt}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_input_unmodified() {
        let text = "short input";
        assert_eq!(truncate_chars(text, 2000), text);
    }

    #[test]
    fn test_truncate_exact_limit() {
        let text = "abcd";
        assert_eq!(truncate_chars(text, 4), "abcd");
        assert_eq!(truncate_chars(text, 3), "abc");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "ééééé";
        assert_eq!(truncate_chars(text, 3), "ééé");
    }

    #[test]
    fn test_document_prompt_truncates_long_input() {
        let text = "x".repeat(DOCUMENT_PROMPT_LIMIT + 500);
        let prompt = document_prompt(&text, SummaryLength::Medium);
        let embedded = prompt.matches('x').count();
        assert_eq!(embedded, DOCUMENT_PROMPT_LIMIT);
        assert!(prompt.contains("comprehensive summary in 4-6 paragraphs"));
    }

    #[test]
    fn test_section_prompt_varies_by_level() {
        let eli5 = section_prompt("text", SectionName::Results, DetailLevel::Eli5);
        let expert = section_prompt("text", SectionName::Results, DetailLevel::Expert);
        assert!(eli5.contains("5-year-old"));
        assert!(expert.contains("expert-level analysis"));
        assert!(eli5.contains("results section"));
    }

    #[test]
    fn test_section_prompt_truncates_at_section_limit() {
        let text = "y".repeat(SECTION_PROMPT_LIMIT + 100);
        let prompt = section_prompt(&text, SectionName::Abstract, DetailLevel::Technical);
        assert_eq!(prompt.matches('y').count(), SECTION_PROMPT_LIMIT);
    }
}
