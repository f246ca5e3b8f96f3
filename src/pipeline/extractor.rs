//! Match extraction.

use super::compiler::CompiledPattern;
use crate::model::MatchSpan;

/// Find every non-overlapping match of `pattern` in `text`, left to right.
///
/// Each match is the leftmost-first match starting at or after the end of
/// the previous one. Empty matches advance the scan by one character, so a
/// pattern that matches the empty string everywhere yields one span per
/// character boundary and terminates.
///
/// An empty result means "no matches", which is distinct from a compile
/// failure.
pub fn extract_matches(pattern: &CompiledPattern, text: &str) -> Vec<MatchSpan> {
    pattern.regex().find_iter(text).map(MatchSpan::from).collect()
}
