//! Error types for rgx.
//!
//! Errors are grouped per concern with `thiserror` and compose into
//! [`AppError`] through `From` impls so callers can propagate with `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Errors surfaced by the binary
//!   - [`InputError`] - Reading piped stdin failed (reported, never fatal)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file unreadable or invalid
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing subscriber setup failed
//!   - [`TuiError`](crate::view::TuiError) - Terminal I/O failed
//! - [`PatternError`] - The pattern does not compile (never fatal)
//!
//! # Recovery Strategy
//!
//! A [`PatternError`] is shown inline under the pattern field and the last
//! good highlight stays on screen. An [`InputError`] is converted to
//! [`AppError::Input`] and printed on stderr, then the session starts with an
//! empty document. Config, logging and terminal errors abort.

use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the initial document from stdin. Reported, not
    /// returned: the session continues with an empty document.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal setup, drawing or event reading failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Errors encountered when reading the initial document.
#[derive(Debug, Error)]
pub enum InputError {
    /// Reading piped stdin failed before EOF.
    #[error("Failed to read piped stdin: {0}")]
    Io(#[from] std::io::Error),
}

/// The pattern text could not be compiled into a matcher.
///
/// Carries the regex engine's own diagnostic. The full message may span
/// several lines (the engine draws a caret under the offending position);
/// [`PatternError::summary`] gives a one-line form for the diagnostic row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PatternError {
    pattern: String,
    message: String,
}

impl PatternError {
    /// Create a compile error for `pattern` with the engine's message.
    pub fn new(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// The pattern text that failed to compile.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The full diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// One-line diagnostic.
    ///
    /// The last non-blank line of the message, which for the regex engine's
    /// syntax errors is the `error: ...` line. Never empty.
    pub fn summary(&self) -> &str {
        self.message
            .lines()
            .map(str::trim)
            .rfind(|line| !line.is_empty())
            .unwrap_or("invalid pattern")
    }
}
