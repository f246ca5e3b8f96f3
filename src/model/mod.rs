//! Domain model types (pure).

pub mod error;
pub mod key_action;
pub mod span;

// Re-export for convenience
pub use error::{AppError, InputError, PatternError};
pub use key_action::KeyAction;
pub use span::MatchSpan;
