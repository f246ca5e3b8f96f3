//! Pattern compilation.

use crate::model::PatternError;
use regex::{Regex, RegexBuilder};

/// Default cap on the compiled program size, in bytes.
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A successfully compiled pattern.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    /// The source text this matcher was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Compiles pattern text with the `regex` crate dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternCompiler {
    size_limit: usize,
}

impl PatternCompiler {
    /// Create a compiler with the given program size limit.
    pub fn new(size_limit: usize) -> Self {
        Self { size_limit }
    }

    /// Compile `pattern`.
    ///
    /// The empty pattern compiles and matches the empty string at every
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] with the engine's diagnostic when the pattern
    /// is syntactically invalid or exceeds the size limit.
    pub fn compile(&self, pattern: &str) -> Result<CompiledPattern, PatternError> {
        RegexBuilder::new(pattern)
            .size_limit(self.size_limit)
            .build()
            .map(|regex| CompiledPattern { regex })
            .map_err(|e| PatternError::new(pattern, e.to_string()))
    }
}

impl Default for PatternCompiler {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE_LIMIT)
    }
}

/// Compile `pattern` with the default size limit.
///
/// # Errors
///
/// See [`PatternCompiler::compile`].
pub fn compile_pattern(pattern: &str) -> Result<CompiledPattern, PatternError> {
    PatternCompiler::default().compile(pattern)
}
