//! Highlight rendering.
//!
//! Turns a document plus its ordered match spans into [`RenderedOutput`]: the
//! document split into plain and highlighted segments. The output is a pure
//! function of its inputs; styling happens only when it is converted to
//! `ratatui` text with a [`StyleConfig`].

use crate::model::MatchSpan;
use crate::view::StyleConfig;
use ratatui::text::{Line, Span, Text};

/// A run of document text with a single highlight state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    text: String,
    highlighted: bool,
}

impl Segment {
    /// The segment's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the segment lies inside a match.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

/// Document text with matched spans tagged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedOutput {
    segments: Vec<Segment>,
    truncated: bool,
}

impl RenderedOutput {
    /// Output for a document with no matches: the text verbatim, untagged.
    pub fn plain(text: &str) -> Self {
        let mut out = Self::default();
        out.push(text, false);
        out
    }

    /// Segments in document order. Empty segments are never stored.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when rendering stopped at a malformed span and the rest of the
    /// document was not emitted.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Concatenation of every segment's text.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Number of highlighted segments.
    pub fn highlighted_count(&self) -> usize {
        self.segments.iter().filter(|s| s.highlighted).count()
    }

    /// Convert to styled `ratatui` text, splitting segments at newlines.
    pub fn to_text(&self, styles: &StyleConfig) -> Text<'static> {
        let mut lines = Vec::new();
        let mut current: Vec<Span<'static>> = Vec::new();

        for segment in &self.segments {
            let style = if segment.highlighted {
                styles.highlight
            } else {
                styles.plain
            };
            let mut pieces = segment.text.split('\n').peekable();
            while let Some(piece) = pieces.next() {
                if !piece.is_empty() {
                    current.push(Span::styled(piece.to_owned(), style));
                }
                if pieces.peek().is_some() {
                    lines.push(Line::from(std::mem::take(&mut current)));
                }
            }
        }
        lines.push(Line::from(current));

        Text::from(lines)
    }

    fn push(&mut self, text: &str, highlighted: bool) {
        if !text.is_empty() {
            self.segments.push(Segment {
                text: text.to_owned(),
                highlighted,
            });
        }
    }
}

/// Render `text` with `spans` highlighted.
///
/// Spans are consumed in order with a cursor at the next unemitted offset.
/// For each span starting at or after the cursor, the gap before it is
/// emitted plain and the span highlighted. A span that starts before the
/// cursor, or whose offsets are inverted, out of bounds or off a character
/// boundary, stops rendering there: the remaining tail is not emitted and
/// the output is marked truncated.
///
/// With no spans the document is emitted verbatim.
pub fn render_highlights(text: &str, spans: &[MatchSpan]) -> RenderedOutput {
    if spans.is_empty() {
        return RenderedOutput::plain(text);
    }

    let mut out = RenderedOutput::default();
    let mut cursor = 0;
    for span in spans {
        let gap = text.get(cursor..span.start());
        let matched = text.get(span.start()..span.end());
        let (Some(gap), Some(matched)) = (gap, matched) else {
            out.truncated = true;
            return out;
        };
        out.push(gap, false);
        out.push(matched, true);
        cursor = span.end();
    }
    out.push(&text[cursor..], false);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Modifier, Style};

    fn markup(out: &RenderedOutput) -> String {
        out.segments()
            .iter()
            .map(|s| {
                if s.is_highlighted() {
                    format!("[{}]", s.text())
                } else {
                    s.text().to_owned()
                }
            })
            .collect()
    }

    #[test]
    fn no_spans_passes_text_through_verbatim() {
        let text = "line one\n\tline two  \n";
        let out = render_highlights(text, &[]);
        assert_eq!(out.text(), text);
        assert_eq!(out.highlighted_count(), 0);
        assert!(!out.is_truncated());
    }

    #[test]
    fn single_span_in_the_middle() {
        let out = render_highlights("the cat sat", &[MatchSpan::new(4, 7)]);
        assert_eq!(markup(&out), "the [cat] sat");
    }

    #[test]
    fn adjacent_spans_stay_separate() {
        let spans = [MatchSpan::new(0, 1), MatchSpan::new(1, 2), MatchSpan::new(2, 3)];
        let out = render_highlights("aaa", &spans);
        assert_eq!(markup(&out), "[a][a][a]");
        assert_eq!(out.highlighted_count(), 3);
    }

    #[test]
    fn span_at_end_has_no_trailing_segment() {
        let out = render_highlights("abc", &[MatchSpan::new(1, 3)]);
        assert_eq!(markup(&out), "a[bc]");
    }

    #[test]
    fn empty_spans_emit_text_unhighlighted() {
        let spans = [
            MatchSpan::new(0, 0),
            MatchSpan::new(1, 1),
            MatchSpan::new(2, 2),
        ];
        let out = render_highlights("ab", &spans);
        assert_eq!(out.text(), "ab");
        assert_eq!(out.highlighted_count(), 0);
    }

    #[test]
    fn overlapping_span_truncates_rest_of_document() {
        let spans = [MatchSpan::new(0, 3), MatchSpan::new(2, 4)];
        let out = render_highlights("abcdef", &spans);
        assert_eq!(markup(&out), "[abc]");
        assert!(out.is_truncated());
    }

    #[test]
    fn out_of_order_span_truncates() {
        let spans = [MatchSpan::new(4, 5), MatchSpan::new(0, 1)];
        let out = render_highlights("abcdef", &spans);
        assert_eq!(markup(&out), "abcd[e]");
        assert!(out.is_truncated());
    }

    #[test]
    fn out_of_bounds_span_truncates() {
        let out = render_highlights("abc", &[MatchSpan::new(1, 10)]);
        assert_eq!(out.text(), "");
        assert!(out.is_truncated());
    }

    #[test]
    fn span_inside_multibyte_char_truncates() {
        // 'é' occupies bytes 3..5
        let out = render_highlights("café!", &[MatchSpan::new(0, 1), MatchSpan::new(4, 5)]);
        assert_eq!(markup(&out), "[c]");
        assert!(out.is_truncated());
    }

    #[test]
    fn to_text_splits_lines_and_styles_matches() {
        let styles = StyleConfig {
            highlight: Style::default().add_modifier(Modifier::REVERSED),
            ..StyleConfig::default()
        };
        let out = render_highlights("ab\ncd", &[MatchSpan::new(1, 4)]);
        let text = out.to_text(&styles);

        assert_eq!(text.lines.len(), 2);
        assert_eq!(text.lines[0].spans.len(), 2);
        assert_eq!(text.lines[0].spans[0].content, "a");
        assert_eq!(text.lines[0].spans[1].content, "b");
        assert_eq!(text.lines[0].spans[1].style, styles.highlight);
        assert_eq!(text.lines[1].spans[0].content, "c");
        assert_eq!(text.lines[1].spans[0].style, styles.highlight);
        assert_eq!(text.lines[1].spans[1].content, "d");
        assert_eq!(text.lines[1].spans[1].style, styles.plain);
    }

    #[test]
    fn to_text_keeps_trailing_empty_line() {
        let out = RenderedOutput::plain("a\n");
        let text = out.to_text(&StyleConfig::default());
        assert_eq!(text.lines.len(), 2);
        assert!(text.lines[1].spans.is_empty());
    }
}
