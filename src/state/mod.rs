//! UI state machine (pure).
//!
//! All state transitions are testable without a terminal.

pub mod app_state;
pub mod event;

// Re-export for convenience
pub use app_state::{AppState, Focus, PATTERN_PLACEHOLDER};
pub use event::{EventOutcome, InputEvent};
