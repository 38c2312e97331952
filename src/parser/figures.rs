//! Figure and table reference extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches references like "Figure 3", "Fig. 2a", "Table 1", "Tbl. 4".
static FIGURE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(figure|fig\.|table|tbl\.)\s+(\d+[a-z]?)").expect("figure pattern is valid")
});

/// Collect figure and table references from the document text, in match
/// order, rendered as "<kind> <number>". Repeated references are kept.
pub fn extract_key_figures(text: &str) -> Vec<String> {
    FIGURE_PATTERN
        .captures_iter(text)
        .map(|caps| format!("{} {}", &caps[1], &caps[2]))
        .collect()
}
