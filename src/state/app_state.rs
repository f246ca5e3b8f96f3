//! Application state and transitions.
//!
//! AppState owns both editable fields, focus, the viewport and the pipeline
//! memo. Every event goes through [`AppState::handle`], which dispatches on
//! the event kind and then refreshes the memo.

use super::event::{EventOutcome, InputEvent};
use crate::config::ResolvedConfig;
use crate::model::PatternError;
use crate::pipeline::{PatternCompiler, PipelineMemo, RenderedOutput};
use crate::source::document_lines;
use crate::view::StyleConfig;
use crate::view_state::{FieldLayout, LayoutConfig, ViewportSize};
use crossterm::event::KeyEvent;
use ratatui::style::Style;
use tracing::debug;
use tui_textarea::{CursorMove, Input, Key, TextArea};

/// Placeholder shown in an empty pattern field.
pub const PATTERN_PLACEHOLDER: &str = "regex here";

// ===== Focus =====

/// Which field receives editing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The single-line regex field.
    Pattern,
    /// The multi-line text field.
    #[default]
    Document,
}

impl Focus {
    /// The other field.
    pub fn toggled(self) -> Self {
        match self {
            Focus::Pattern => Focus::Document,
            Focus::Document => Focus::Pattern,
        }
    }
}

// ===== AppState =====

/// Application state.
///
/// # State Machine
///
/// Focus ({Pattern, Document}) and pattern validity ({valid, invalid}) are
/// orthogonal:
///
/// - Focus: Pattern ⇄ Document (via Tab)
/// - Validity: decided by the memo on every refresh; an invalid pattern
///   keeps the last valid output on screen alongside the diagnostic
pub struct AppState<'a> {
    pattern: TextArea<'a>,
    document: TextArea<'a>,
    focus: Focus,
    viewport: ViewportSize,
    layout_config: LayoutConfig,
    layout: FieldLayout,
    memo: PipelineMemo,
    cursor_style: Style,
}

impl<'a> AppState<'a> {
    /// Create the initial state.
    ///
    /// The pattern field is seeded with `config.initial_pattern`, the
    /// document field with `document`. The document field starts focused and
    /// the pipeline runs once so the first frame already shows highlights.
    pub fn new(
        config: &ResolvedConfig,
        document: &str,
        viewport: ViewportSize,
        styles: &StyleConfig,
    ) -> Self {
        // The pattern field holds exactly one line.
        let seed = config.initial_pattern.replace(['\r', '\n'], "");
        let mut pattern = TextArea::new(vec![seed]);
        pattern.set_cursor_line_style(Style::default());
        pattern.set_placeholder_text(PATTERN_PLACEHOLDER);
        pattern.set_placeholder_style(styles.placeholder);
        pattern.move_cursor(CursorMove::End);

        let mut document = TextArea::new(document_lines(document));
        document.set_cursor_line_style(Style::default());
        document.set_line_number_style(styles.line_number);

        let mut state = Self {
            pattern,
            document,
            focus: Focus::default(),
            viewport,
            layout_config: config.layout,
            layout: FieldLayout::compute(viewport, &config.layout),
            memo: PipelineMemo::new(PatternCompiler::new(config.size_limit)),
            cursor_style: styles.cursor,
        };
        state.apply_focus();
        state.refresh();
        state
    }

    /// Process one event to completion.
    pub fn handle(&mut self, event: InputEvent) -> EventOutcome {
        match event {
            InputEvent::Quit => return EventOutcome::Quit,
            InputEvent::ToggleFocus => self.toggle_focus(),
            InputEvent::Resize(viewport) => self.resize(viewport),
            InputEvent::Edit(key) => self.edit(key),
        }
        self.refresh();
        EventOutcome::Continue
    }

    // ===== Accessors =====

    /// Current pattern text.
    pub fn pattern_text(&self) -> String {
        self.pattern.lines().join("")
    }

    /// Current document text, lines joined with `\n`.
    pub fn document_text(&self) -> String {
        self.document.lines().join("\n")
    }

    /// Field currently receiving editing keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Last known terminal size.
    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Field rectangles for the current viewport.
    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    /// Highlighted output of the last valid pattern.
    pub fn output(&self) -> &RenderedOutput {
        self.memo.output()
    }

    /// Number of matches in the displayed output.
    pub fn match_count(&self) -> usize {
        self.memo.match_count()
    }

    /// Compile diagnostic for the current pattern, if invalid.
    pub fn pattern_error(&self) -> Option<&PatternError> {
        self.memo.error()
    }

    /// The pattern text-area widget.
    pub fn pattern_field(&self) -> &TextArea<'a> {
        &self.pattern
    }

    /// The document text-area widget.
    pub fn document_field(&self) -> &TextArea<'a> {
        &self.document
    }

    // ===== Transitions =====

    fn toggle_focus(&mut self) {
        self.focus = self.focus.toggled();
        self.apply_focus();
        debug!(focus = ?self.focus, "Focus toggled");
    }

    /// Show the cursor on the focused field and hide it on the other.
    fn apply_focus(&mut self) {
        let (focused, blurred) = match self.focus {
            Focus::Pattern => (&mut self.pattern, &mut self.document),
            Focus::Document => (&mut self.document, &mut self.pattern),
        };
        focused.set_cursor_style(self.cursor_style);
        blurred.set_cursor_style(Style::default());
    }

    fn resize(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
        self.layout = FieldLayout::compute(viewport, &self.layout_config);
        debug!(width = viewport.width, height = viewport.height, "Resized");
    }

    /// Route a key to the focused field.
    fn edit(&mut self, key: KeyEvent) {
        let input = Input::from(key);
        let modified = match self.focus {
            Focus::Pattern if inserts_newline(&input) => false,
            Focus::Pattern => self.pattern.input(input),
            Focus::Document => self.document.input(input),
        };
        if modified {
            debug!(focus = ?self.focus, "Field edited");
        }
    }

    fn refresh(&mut self) {
        let pattern = self.pattern_text();
        let document = self.document_text();
        self.memo.refresh(&pattern, &document);
    }
}

/// Keys the text area would turn into a line break.
fn inserts_newline(input: &Input) -> bool {
    matches!(
        input,
        Input { key: Key::Enter, .. }
            | Input { key: Key::Char('m'), ctrl: true, .. }
            | Input { key: Key::Char('\n' | '\r'), .. }
    )
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
