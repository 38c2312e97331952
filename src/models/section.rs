//! Section model: the closed set of recognized paper sections and the
//! offset-ordered mapping produced by the segmenter.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The sections a paper can be segmented into.
///
/// This is a closed set: the segmenter only ever produces these names, so
/// downstream code can match exhaustively instead of handling free-form
/// strings. Declaration order matches the conventional order of the
/// sections in a paper, which is also the priority order used when
/// summarizing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionName {
    Abstract,
    Introduction,
    Methodology,
    Results,
    Discussion,
    Conclusion,
    References,
}

impl SectionName {
    /// All section names, in declaration order.
    pub const ALL: [SectionName; 7] = [
        SectionName::Abstract,
        SectionName::Introduction,
        SectionName::Methodology,
        SectionName::Results,
        SectionName::Discussion,
        SectionName::Conclusion,
        SectionName::References,
    ];

    /// Lowercase identifier used in JSON payloads and log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionName::Abstract => "abstract",
            SectionName::Introduction => "introduction",
            SectionName::Methodology => "methodology",
            SectionName::Results => "results",
            SectionName::Discussion => "discussion",
            SectionName::Conclusion => "conclusion",
            SectionName::References => "references",
        }
    }
}

impl std::fmt::Display for SectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A contiguous span of the document identified as one section.
///
/// `start` and `end` are byte offsets into the raw document text, before
/// trimming; `text` is the trimmed span content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub name: SectionName,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// The sections discovered in one document.
///
/// Sections whose heading pattern never matched are simply absent. Spans
/// are non-overlapping and ordered by start offset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionMap {
    sections: BTreeMap<SectionName, Section>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, section: Section) {
        self.sections.insert(section.name, section);
    }

    pub fn get(&self, name: SectionName) -> Option<&Section> {
        self.sections.get(&name)
    }

    /// Trimmed text of a section, if present.
    pub fn text(&self, name: SectionName) -> Option<&str> {
        self.sections.get(&name).map(|s| s.text.as_str())
    }

    pub fn contains(&self, name: SectionName) -> bool {
        self.sections.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections ordered by their start offset in the document.
    pub fn by_offset(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self.sections.values().collect();
        sections.sort_by_key(|s| s.start);
        sections
    }

    /// Discovered section names, ordered by start offset.
    pub fn names(&self) -> Vec<SectionName> {
        self.by_offset().iter().map(|s| s.name).collect()
    }
}
