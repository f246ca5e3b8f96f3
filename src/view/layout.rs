//! Frame rendering.
//!
//! Draws the pattern field, document field, diagnostic row and output panel
//! into the rectangles computed by [`FieldLayout`].
//!
//! [`FieldLayout`]: crate::view_state::FieldLayout

use crate::state::AppState;
use crate::view::StyleConfig;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Padding, Paragraph, Wrap},
    Frame,
};

/// Render one frame of the application.
///
/// `hint` is shown along the bottom border of the output panel and
/// `output_padding` is the left padding inside it.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState<'_>,
    styles: &StyleConfig,
    hint: &str,
    output_padding: u16,
) {
    let area = frame.area();
    let layout = state.layout();

    frame.render_widget(state.pattern_field(), clip(layout.pattern, area));
    frame.render_widget(state.document_field(), clip(layout.document, area));
    render_diagnostic(frame, clip(layout.diagnostic, area), state, styles);
    render_output(
        frame,
        clip(layout.output, area),
        state,
        styles,
        hint,
        output_padding,
    );
}

/// Layout rectangles come from the last resize event; the frame may be
/// smaller if the terminal shrank since.
fn clip(rect: Rect, area: Rect) -> Rect {
    rect.intersection(area)
}

fn render_diagnostic(frame: &mut Frame, area: Rect, state: &AppState<'_>, styles: &StyleConfig) {
    let Some(error) = state.pattern_error() else {
        return;
    };
    let line = Line::styled(error.summary(), styles.diagnostic);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_output(
    frame: &mut Frame,
    area: Rect,
    state: &AppState<'_>,
    styles: &StyleConfig,
    hint: &str,
    output_padding: u16,
) {
    let block = Block::bordered()
        .border_style(styles.border)
        .title(match_count_title(state.match_count()))
        .title_bottom(hint.to_string())
        .padding(Padding::left(output_padding));

    let paragraph = Paragraph::new(state.output().to_text(styles))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn match_count_title(count: usize) -> String {
    match count {
        1 => " 1 match ".to_string(),
        n => format!(" {n} matches "),
    }
}
