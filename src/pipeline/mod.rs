//! Match-and-highlight pipeline (pure).
//!
//! `compiler` → `extractor` → `renderer`, fronted by `memo`, which skips the
//! whole chain when neither the pattern nor the document changed.

pub mod compiler;
pub mod extractor;
pub mod memo;
pub mod renderer;

pub use compiler::{compile_pattern, CompiledPattern, PatternCompiler, DEFAULT_SIZE_LIMIT};
pub use extractor::extract_matches;
pub use memo::{PipelineMemo, Refresh};
pub use renderer::{render_highlights, RenderedOutput, Segment};
