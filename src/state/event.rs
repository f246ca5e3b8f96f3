//! Input events the state machine understands.

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::view_state::ViewportSize;
use crossterm::event::{Event, KeyEvent, KeyEventKind};

/// A terminal event, classified.
///
/// Closed set: one handler per variant in [`AppState::handle`].
///
/// [`AppState::handle`]: crate::state::AppState::handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Move focus to the other field.
    ToggleFocus,
    /// Leave the program.
    Quit,
    /// The terminal changed size.
    Resize(ViewportSize),
    /// Any other key, for the focused field.
    Edit(KeyEvent),
}

impl InputEvent {
    /// Classify a raw terminal event.
    ///
    /// Returns `None` for events the application ignores: key releases,
    /// mouse, focus and paste events.
    pub fn classify(event: Event, bindings: &KeyBindings) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Release => None,
            Event::Key(key) => Some(match bindings.get(key) {
                Some(KeyAction::ToggleFocus) => InputEvent::ToggleFocus,
                Some(KeyAction::Quit) => InputEvent::Quit,
                None => InputEvent::Edit(key),
            }),
            Event::Resize(width, height) => {
                Some(InputEvent::Resize(ViewportSize::new(width, height)))
            }
            _ => None,
        }
    }
}

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Keep reading events.
    Continue,
    /// Stop and print the pattern.
    Quit,
}
