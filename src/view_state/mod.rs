//! View-state layer - pure layout computation.
//!
//! # Module Structure
//!
//! - `layout`: ViewportSize, LayoutConfig and the FieldLayout sizer

pub mod layout;

pub use layout::{FieldLayout, LayoutConfig, ViewportSize};
