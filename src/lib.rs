//! Interactive regex tester (rgx)
//!
//! TUI application for trying a regular expression against a document and
//! seeing every match highlighted as you type.
//!
//! Pure core (`pipeline`, `state`, `view_state`) behind an impure shell
//! (`source`, `view`).

pub mod config;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
