//! Immutable style configuration.
//!
//! Styles are resolved once at startup from config and the colour policy,
//! then passed by reference into the renderer and the view.

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors explicitly on or off.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// 256-colour palette indices from the config file's `[colors]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Foreground of highlighted matches and the diagnostic.
    pub highlight_fg: u8,
    /// Background of highlighted matches and the diagnostic.
    pub highlight_bg: u8,
    /// Output panel border.
    pub border: u8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            highlight_fg: 204,
            highlight_bg: 235,
            border: 240,
        }
    }
}

// ===== StyleConfig =====

/// Every style the view draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleConfig {
    /// Matched document text.
    pub highlight: Style,
    /// Unmatched document text in the output panel.
    pub plain: Style,
    /// Compile diagnostic row.
    pub diagnostic: Style,
    /// Output panel border.
    pub border: Style,
    /// Cursor of the focused field.
    pub cursor: Style,
    /// Placeholder text of an empty pattern field.
    pub placeholder: Style,
    /// Line numbers of the document field.
    pub line_number: Style,
}

impl StyleConfig {
    /// Resolve styles from the palette and colour policy.
    ///
    /// Without colours, matches fall back to reverse video so they stay
    /// distinguishable.
    pub fn new(palette: &Palette, colors: ColorConfig) -> Self {
        let cursor = Style::default().add_modifier(Modifier::REVERSED);
        if colors.colors_enabled() {
            let highlight = Style::default()
                .fg(Color::Indexed(palette.highlight_fg))
                .bg(Color::Indexed(palette.highlight_bg));
            Self {
                highlight,
                plain: Style::default(),
                diagnostic: highlight,
                border: Style::default().fg(Color::Indexed(palette.border)),
                cursor,
                placeholder: Style::default().fg(Color::DarkGray),
                line_number: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                highlight: Style::default().add_modifier(Modifier::REVERSED),
                plain: Style::default(),
                diagnostic: Style::default().add_modifier(Modifier::BOLD),
                border: Style::default(),
                cursor,
                placeholder: Style::default().add_modifier(Modifier::DIM),
                line_number: Style::default().add_modifier(Modifier::DIM),
            }
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new(&Palette::default(), ColorConfig::new(true))
    }
}

// ===== Tests =====
