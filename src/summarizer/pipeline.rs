//! Multi-section summarization and related-work suggestions.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use crate::models::{DetailLevel, Document, RelatedPaper, SectionName};
use crate::sources::Source;

use super::{OllamaClient, SummarizeError};

/// Sections summarized for a section-aware summary, in priority order.
pub const PRIORITY_SECTIONS: [SectionName; 5] = [
    SectionName::Abstract,
    SectionName::Introduction,
    SectionName::Methodology,
    SectionName::Results,
    SectionName::Conclusion,
];

/// Maximum keywords fed to the related-work search.
const RELATED_KEYWORD_LIMIT: usize = 5;

/// Maximum related papers returned.
const RELATED_RESULT_LIMIT: usize = 5;

/// Results fetched per keyword.
const RELATED_PER_KEYWORD: usize = 2;

static KEYWORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z]{4,}\b").expect("keyword pattern is valid"));

/// Summarize each present priority section, sequentially, one backend
/// call per section. Absent sections are skipped without a placeholder.
pub async fn summarize_document(
    client: &OllamaClient,
    document: &Document,
    level: DetailLevel,
) -> Result<BTreeMap<SectionName, String>, SummarizeError> {
    let mut summaries = BTreeMap::new();

    for name in PRIORITY_SECTIONS {
        let Some(text) = document.sections.text(name) else {
            continue;
        };
        tracing::debug!(section = %name, chars = text.len(), "summarizing section");
        let summary = client.summarize_section(text, name, level).await?;
        summaries.insert(name, summary);
    }

    Ok(summaries)
}

/// Technical recreation of the methodology section, or a fixed notice
/// when the document has none.
pub async fn recreate_methodology(
    client: &OllamaClient,
    document: &Document,
) -> Result<String, SummarizeError> {
    match document.sections.text(SectionName::Methodology) {
        Some(text) => {
            client
                .summarize_section(text, SectionName::Methodology, DetailLevel::Technical)
                .await
        }
        None => Ok("Methodology section not found".to_string()),
    }
}

/// Candidate search keywords from the abstract and introduction: words of
/// four or more lowercase letters, de-duplicated preserving first
/// occurrence, capped at [`RELATED_KEYWORD_LIMIT`].
pub fn related_keywords(document: &Document) -> Vec<String> {
    let text = format!(
        "{} {}",
        document.sections.text(SectionName::Abstract).unwrap_or(""),
        document
            .sections
            .text(SectionName::Introduction)
            .unwrap_or("")
    )
    .to_lowercase();

    let mut keywords = Vec::new();
    for m in KEYWORD_PATTERN.find_iter(&text) {
        let word = m.as_str();
        if !keywords.iter().any(|k| k == word) {
            keywords.push(word.to_string());
        }
        if keywords.len() == RELATED_KEYWORD_LIMIT {
            break;
        }
    }
    keywords
}

/// Search the remote source for papers related by keyword.
///
/// Remote failures are swallowed into a shorter (possibly empty) list,
/// never propagated: suggestions are best-effort.
pub async fn suggest_related_work(source: &dyn Source, document: &Document) -> Vec<RelatedPaper> {
    let mut related = Vec::new();

    for keyword in related_keywords(document) {
        match source.search(&keyword, RELATED_PER_KEYWORD).await {
            Ok(papers) => {
                related.extend(papers.into_iter().map(|paper| RelatedPaper {
                    title: paper.title,
                    authors: paper.authors,
                    arxiv_id: paper.paper_id,
                }));
            }
            Err(error) => {
                tracing::debug!(%keyword, %error, "related-work search failed, skipping keyword");
            }
        }
    }

    related.truncate(RELATED_RESULT_LIMIT);
    related
}
