//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to application actions.
///
/// Keys without a binding are editing input for the focused field.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<(KeyCode, KeyModifiers), KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers are compared, so press/repeat kinds and
    /// keyboard-enhancement state do not affect the lookup.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&(key.code, key.modifiers)).copied()
    }

    /// Bind `code` + `modifiers` to `action`, replacing any previous binding.
    pub fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert((code, modifiers), action);
    }

    /// Keys bound to `action`, in a stable order for display.
    pub fn keys_for(&self, action: KeyAction) -> Vec<(KeyCode, KeyModifiers)> {
        let mut keys: Vec<_> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| *key)
            .collect();
        keys.sort_by_key(|(code, modifiers)| key_label(*code, *modifiers));
        keys
    }

    /// One-line summary of the bound actions, e.g. `Tab switch field`.
    pub fn hint_line(&self) -> String {
        [KeyAction::ToggleFocus, KeyAction::Quit]
            .into_iter()
            .filter_map(|action| {
                let keys = self.keys_for(action);
                if keys.is_empty() {
                    return None;
                }
                let labels: Vec<String> = keys
                    .into_iter()
                    .map(|(code, modifiers)| key_label(code, modifiers))
                    .collect();
                Some(format!("{} {}", labels.join("/"), action.label()))
            })
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

/// Human-readable name of a key combination, e.g. `Ctrl+c`.
pub fn key_label(code: KeyCode, modifiers: KeyModifiers) -> String {
    let key = match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    };
    let mut label = String::new();
    if modifiers.contains(KeyModifiers::CONTROL) {
        label.push_str("Ctrl+");
    }
    if modifiers.contains(KeyModifiers::ALT) {
        label.push_str("Alt+");
    }
    if modifiers.contains(KeyModifiers::SHIFT) {
        label.push_str("Shift+");
    }
    label.push_str(&key);
    label
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };

        bindings.bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::ToggleFocus);
        bindings.bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Quit);
        bindings.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    #[test]
    fn tab_toggles_focus() {
        let bindings = KeyBindings::default();
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(bindings.get(key), Some(KeyAction::ToggleFocus));
    }

    #[test]
    fn escape_quits() {
        let bindings = KeyBindings::default();
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(bindings.get(key), Some(KeyAction::Quit));
    }

    #[test]
    fn ctrl_c_quits() {
        let bindings = KeyBindings::default();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(bindings.get(key), Some(KeyAction::Quit));
    }

    #[test]
    fn plain_c_is_unbound() {
        let bindings = KeyBindings::default();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(bindings.get(key), None, "'c' must reach the focused field");
    }

    #[test]
    fn shift_tab_is_unbound() {
        let bindings = KeyBindings::default();
        let key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(bindings.get(key), None);
    }

    #[test]
    fn lookup_ignores_kind_and_state() {
        let bindings = KeyBindings::default();
        let key = KeyEvent::new_with_kind_and_state(
            KeyCode::Esc,
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
            KeyEventState::CAPS_LOCK,
        );
        assert_eq!(bindings.get(key), Some(KeyAction::Quit));
    }

    #[test]
    fn keys_for_quit_lists_both_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.keys_for(KeyAction::Quit).len(), 2);
    }

    #[test]
    fn key_labels_are_readable() {
        assert_eq!(key_label(KeyCode::Tab, KeyModifiers::NONE), "Tab");
        assert_eq!(key_label(KeyCode::Esc, KeyModifiers::NONE), "Esc");
        assert_eq!(key_label(KeyCode::Char('c'), KeyModifiers::CONTROL), "Ctrl+c");
    }

    #[test]
    fn hint_line_lists_default_actions() {
        let hint = KeyBindings::default().hint_line();
        assert_eq!(hint, "Tab switch field · Ctrl+c/Esc quit");
    }

    #[test]
    fn bind_replaces_existing_binding() {
        let mut bindings = KeyBindings::default();
        bindings.bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::Quit);
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(bindings.get(key), Some(KeyAction::Quit));
        assert!(bindings.keys_for(KeyAction::ToggleFocus).is_empty());
    }
}
