//! Field layout for a given terminal size.
//!
//! Screen structure, top to bottom:
//!
//! ```text
//!     <pattern field>            1 row, indented
//! <document field>               height/2 - margin rows
//!     <diagnostic>               1 row, indented
//! ┌──────────────────────────┐
//! │   <highlighted output>   │   height/2 - (margin + 1) inner rows
//! └──────────────────────────┘
//! ```
//!
//! Every rectangle is clipped to the viewport, so tiny terminals degrade to
//! zero-height areas instead of overflowing.

use ratatui::layout::Rect;
use serde::Deserialize;

/// Width/height of each border drawn around the output panel.
pub const BORDER_THICKNESS: u16 = 1;

/// Terminal dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportSize {
    /// Columns.
    pub width: u16,
    /// Rows.
    pub height: u16,
}

impl ViewportSize {
    /// Create a viewport size.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Tunable layout constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Rows subtracted from half the terminal height for the document field.
    pub document_margin: u16,
    /// Left indent of the pattern field and diagnostic row.
    pub pattern_indent: u16,
    /// Left padding inside the output panel.
    pub output_padding: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            document_margin: 1,
            pattern_indent: 4,
            output_padding: 3,
        }
    }
}

/// Rectangles for every screen element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldLayout {
    /// Single-line pattern field.
    pub pattern: Rect,
    /// Multi-line document field.
    pub document: Rect,
    /// Compile diagnostic row.
    pub diagnostic: Rect,
    /// Output panel including its border.
    pub output: Rect,
}

impl FieldLayout {
    /// Compute the layout for `viewport`.
    pub fn compute(viewport: ViewportSize, config: &LayoutConfig) -> Self {
        let ViewportSize { width, height } = viewport;
        let half = height / 2;
        let document_height = half.saturating_sub(config.document_margin);
        let output_inner =
            half.saturating_sub(config.document_margin.saturating_add(BORDER_THICKNESS));

        let mut rows = RowCursor::new(height);
        let pattern = rows.take(1);
        let document = rows.take(document_height);
        let diagnostic = rows.take(1);
        let output = rows.take(output_inner + 2 * BORDER_THICKNESS);

        let indent = config.pattern_indent.min(width);
        Self {
            pattern: Rect::new(indent, pattern.0, width - indent, pattern.1),
            document: Rect::new(0, document.0, width, document.1),
            diagnostic: Rect::new(indent, diagnostic.0, width - indent, diagnostic.1),
            output: Rect::new(0, output.0, width, output.1),
        }
    }
}

/// Hands out consecutive row ranges, never past the bottom of the viewport.
struct RowCursor {
    next: u16,
    limit: u16,
}

impl RowCursor {
    fn new(limit: u16) -> Self {
        Self { next: 0, limit }
    }

    /// Returns (y, height) of the next band of at most `rows` rows.
    fn take(&mut self, rows: u16) -> (u16, u16) {
        let y = self.next;
        let height = rows.min(self.limit - y);
        self.next = y + height;
        (y, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: u16, height: u16) -> FieldLayout {
        FieldLayout::compute(ViewportSize::new(width, height), &LayoutConfig::default())
    }

    #[test]
    fn standard_terminal_layout() {
        let l = layout(80, 24);
        assert_eq!(l.pattern, Rect::new(4, 0, 76, 1));
        assert_eq!(l.document, Rect::new(0, 1, 80, 11));
        assert_eq!(l.diagnostic, Rect::new(4, 12, 76, 1));
        // 13 rows left; panel wants 10 inner + 2 border
        assert_eq!(l.output, Rect::new(0, 13, 80, 11));
    }

    #[test]
    fn odd_height_fits_exactly() {
        let l = layout(40, 25);
        assert_eq!(l.document.height, 11);
        assert_eq!(l.output.y, 13);
        assert_eq!(l.output.height, 12);
        assert_eq!(l.output.bottom(), 25);
    }

    #[test]
    fn document_field_spans_full_width() {
        let l = layout(123, 40);
        assert_eq!(l.document.width, 123);
        assert_eq!(l.output.width, 123);
    }

    #[test]
    fn margin_is_tunable() {
        let config = LayoutConfig {
            document_margin: 2,
            ..LayoutConfig::default()
        };
        let l = FieldLayout::compute(ViewportSize::new(80, 24), &config);
        assert_eq!(l.document.height, 10);
        assert_eq!(l.diagnostic.y, 11);
    }

    #[test]
    fn zero_sized_viewport_yields_empty_areas() {
        let l = layout(0, 0);
        assert_eq!(l.pattern.area(), 0);
        assert_eq!(l.document.area(), 0);
        assert_eq!(l.diagnostic.area(), 0);
        assert_eq!(l.output.area(), 0);
    }

    #[test]
    fn narrow_viewport_clamps_indent() {
        let l = layout(2, 10);
        assert_eq!(l.pattern.x, 2);
        assert_eq!(l.pattern.width, 0);
    }

    #[test]
    fn nothing_extends_past_the_bottom() {
        for height in 0..60 {
            let l = layout(80, height);
            for rect in [l.pattern, l.document, l.diagnostic, l.output] {
                assert!(
                    rect.bottom() <= height,
                    "rect {:?} overflows height {}",
                    rect,
                    height
                );
            }
        }
    }

    #[test]
    fn layout_config_deserializes_partial_tables() {
        let config: LayoutConfig = toml::from_str("document_margin = 3").unwrap();
        assert_eq!(config.document_margin, 3);
        assert_eq!(config.pattern_indent, 4);
    }
}
