//! Match span type.

/// A half-open byte range `[start, end)` into the document.
///
/// Spans coming out of the extractor always lie on character boundaries and
/// are ordered and non-overlapping. The type itself does not enforce this so
/// that the renderer's handling of malformed sequences can be exercised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchSpan {
    start: usize,
    end: usize,
}

impl MatchSpan {
    /// Create a span from raw offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Offset of the first matched byte.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset one past the last matched byte.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length in bytes (zero for empty matches and inverted spans).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True for zero-width matches.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<regex::Match<'_>> for MatchSpan {
    fn from(m: regex::Match<'_>) -> Self {
        Self::new(m.start(), m.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_of_regular_span() {
        let span = MatchSpan::new(4, 7);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
    }

    #[test]
    fn inverted_span_has_zero_len() {
        let span = MatchSpan::new(5, 2);
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
    }

    #[test]
    fn from_regex_match_keeps_offsets() {
        let re = regex::Regex::new("cat").unwrap();
        let m = re.find("the cat").unwrap();
        assert_eq!(MatchSpan::from(m), MatchSpan::new(4, 7));
    }
}
