//! TUI rendering and terminal management (impure shell)

mod layout;
mod styles;

pub use styles::{ColorConfig, Palette, StyleConfig};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::state::{AppState, EventOutcome, InputEvent};
use crate::view_state::ViewportSize;
use crossterm::{
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Stderr};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<'a, B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    state: AppState<'a>,
    key_bindings: KeyBindings,
    styles: StyleConfig,
    hint: String,
    output_padding: u16,
}

impl<'a, B> TuiApp<'a, B>
where
    B: Backend,
{
    /// Build the application around an existing terminal.
    ///
    /// The initial viewport is the terminal's current size. Nothing is drawn
    /// until [`draw`](Self::draw) or [`step`](Self::step) is called.
    ///
    /// # Errors
    ///
    /// Returns `TuiError::Io` if the terminal size cannot be queried.
    pub fn with_terminal(
        terminal: Terminal<B>,
        config: &ResolvedConfig,
        document: &str,
        styles: StyleConfig,
    ) -> Result<Self, TuiError> {
        let size = terminal.size()?;
        let viewport = ViewportSize::new(size.width, size.height);
        let key_bindings = KeyBindings::default();
        let hint = format!(" {} ", key_bindings.hint_line());

        Ok(Self {
            terminal,
            state: AppState::new(config, document, viewport, &styles),
            key_bindings,
            styles,
            hint,
            output_padding: config.layout.output_padding,
        })
    }

    /// Process one terminal event and redraw.
    ///
    /// Ignored events (mouse, key release, ...) neither change state nor
    /// trigger a redraw.
    ///
    /// # Errors
    ///
    /// Returns `TuiError::Io` if drawing fails.
    pub fn step(&mut self, event: Event) -> Result<EventOutcome, TuiError> {
        let Some(input) = InputEvent::classify(event, &self.key_bindings) else {
            return Ok(EventOutcome::Continue);
        };
        debug!(?input, "Handling event");

        let outcome = self.state.handle(input);
        if outcome == EventOutcome::Continue {
            self.draw()?;
        }
        Ok(outcome)
    }

    /// Render the current frame
    ///
    /// # Errors
    ///
    /// Returns `TuiError::Io` if the backend fails to draw.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.state;
        let styles = &self.styles;
        let hint = self.hint.as_str();
        let padding = self.output_padding;
        self.terminal
            .draw(|frame| layout::render_layout(frame, state, styles, hint, padding))?;
        Ok(())
    }

    /// Application state, for inspection.
    pub fn state(&self) -> &AppState<'a> {
        &self.state
    }

    /// The underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// The underlying terminal, mutably (e.g. to resize a test backend).
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Current pattern text, as printed on exit.
    pub fn pattern(&self) -> String {
        self.state.pattern_text()
    }
}

impl<'a> TuiApp<'a, CrosstermBackend<Stderr>> {
    /// Create the application on stderr.
    ///
    /// Sets up the terminal in raw mode with an alternate screen. Drawing on
    /// stderr leaves stdout free for the final pattern.
    ///
    /// # Errors
    ///
    /// Returns `TuiError::Io` if terminal setup fails.
    pub fn new(
        config: &ResolvedConfig,
        document: &str,
        styles: StyleConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        stderr.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stderr))?;
        Self::with_terminal(terminal, config, document, styles)
    }

    /// Run the main event loop
    ///
    /// Blocks on terminal events until the user quits, then returns the
    /// pattern text.
    ///
    /// # Errors
    ///
    /// Returns `TuiError::Io` if reading events or drawing fails.
    pub fn run(&mut self) -> Result<String, TuiError> {
        self.draw()?;
        loop {
            if self.step(event::read()?)? == EventOutcome::Quit {
                return Ok(self.pattern());
            }
        }
    }
}

/// Initialize and run the TUI, returning the final pattern.
///
/// Terminal state is restored whether or not the loop succeeds. A failed
/// restore is logged but never replaces the loop's result, so a clean quit
/// still yields the pattern.
///
/// Note: Logging must be initialized by caller before calling this function.
///
/// # Errors
///
/// Returns `TuiError::Io` on terminal setup, event or draw failure.
pub fn run_with(
    config: &ResolvedConfig,
    document: &str,
    styles: StyleConfig,
) -> Result<String, TuiError> {
    let result = TuiApp::new(config, document, styles).and_then(|mut app| app.run());

    // Always restore terminal state
    finish(result, restore_terminal())
}

/// Combine the event loop's result with the terminal restore outcome.
fn finish(
    result: Result<String, TuiError>,
    restored: Result<(), TuiError>,
) -> Result<String, TuiError> {
    if let Err(e) = restored {
        warn!(error = %e, "Failed to restore terminal");
    }
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stderr().execute(LeaveAlternateScreen)?;
    Ok(())
}
