//! Heading-pattern section segmenter.
//!
//! Slices a flat extracted-text stream into named sections by searching
//! for conventional heading lines (numbered headers or English heading
//! words). The patterns are deliberately loose: a heading word appearing
//! inside unrelated prose can anchor a section. That is a known
//! limitation of the heuristic and is preserved as observable behavior.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Section, SectionMap, SectionName};

/// Ordered heading patterns, one per section kind.
///
/// Each pattern matches a case-insensitive heading ending a line: either
/// a bare section number ("2.\n") or a conventional heading word
/// ("Methods\n", or the "Introduction" in "1. Introduction\n").
static SECTION_PATTERNS: Lazy<Vec<(SectionName, Regex)>> = Lazy::new(|| {
    [
        (SectionName::Abstract, r"(?i)(abstract|summary)\s*\n"),
        (SectionName::Introduction, r"(?i)(1\.|introduction|background)\s*\n"),
        (
            SectionName::Methodology,
            r"(?i)(2\.|methodology|methods|approach|proposed method)\s*\n",
        ),
        (
            SectionName::Results,
            r"(?i)(3\.|results|findings|experiments|evaluation)\s*\n",
        ),
        (SectionName::Discussion, r"(?i)(4\.|discussion|analysis)\s*\n"),
        (
            SectionName::Conclusion,
            r"(?i)(5\.|conclusion|conclusions|future work)\s*\n",
        ),
        (SectionName::References, r"(?i)(references|bibliography)\s*\n"),
    ]
    .iter()
    .map(|(name, pattern)| {
        (
            *name,
            Regex::new(pattern).expect("section heading patterns are valid"),
        )
    })
    .collect()
});

/// Segment a document's text into named sections.
///
/// For each section pattern, the first match marks the section start. The
/// section ends at the nearest first match of any *other* pattern found
/// strictly after the start, or at end of text. Sections whose pattern
/// never matches are absent from the result; this never fails.
///
/// Resulting spans are non-overlapping and ordered by start offset.
pub fn segment(text: &str) -> SectionMap {
    let mut sections = SectionMap::new();

    for (name, pattern) in SECTION_PATTERNS.iter() {
        let Some(heading) = pattern.find(text) else {
            continue;
        };
        let start = heading.start();

        // Nearest subsequent heading of any other section, searched
        // strictly after the start offset.
        let mut end = text.len();
        let from = ceil_char_boundary(text, start + 1);
        if from < text.len() {
            let rest = &text[from..];
            for (other, other_pattern) in SECTION_PATTERNS.iter() {
                if other == name {
                    continue;
                }
                if let Some(m) = other_pattern.find(rest) {
                    end = end.min(from + m.start());
                }
            }
        }

        sections.insert(Section {
            name: *name,
            start,
            end,
            text: text[start..end].trim().to_string(),
        });
    }

    sections
}

/// Smallest char boundary >= `index`, clamped to the text length.
fn ceil_char_boundary(text: &str, mut index: usize) -> usize {
    while index < text.len() && !text.is_char_boundary(index) {
        index += 1;
    }
    index.min(text.len())
}
