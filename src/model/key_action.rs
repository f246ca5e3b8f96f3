//! Domain-level keyboard actions independent of key bindings.

/// Actions the application itself handles.
///
/// Keys that map to no action are editing input for the focused field.
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` is handled
/// by [`KeyBindings`](crate::config::KeyBindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move focus to the other field. Default: Tab
    ToggleFocus,
    /// Exit and print the pattern. Default: Esc/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Short label used in the key hint line.
    pub fn label(self) -> &'static str {
        match self {
            KeyAction::ToggleFocus => "switch field",
            KeyAction::Quit => "quit",
        }
    }
}
