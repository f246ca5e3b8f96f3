//! Change-detecting pipeline memo.
//!
//! Holds the (pattern, document) pair the pipeline last ran on successfully,
//! the output it produced, and the current compile diagnostic, if any.

use super::compiler::PatternCompiler;
use super::extractor::extract_matches;
use super::renderer::{render_highlights, RenderedOutput};
use crate::model::PatternError;
use tracing::{debug, warn};

/// What a [`PipelineMemo::refresh`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Inputs equal the last successful run; nothing was recomputed.
    Unchanged,
    /// The pipeline ran and replaced the output.
    Recomputed,
    /// The pattern failed to compile; the previous output is kept.
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LastSeen {
    pattern: String,
    document: String,
}

/// Memoized compile → extract → render pipeline.
///
/// The displayed output is always the result of the most recent successful
/// run. A rejected pattern leaves it untouched and records the diagnostic; the
/// next refresh retries compilation even if nothing changed, so returning to
/// a previously valid pattern clears the diagnostic.
#[derive(Debug, Clone)]
pub struct PipelineMemo {
    compiler: PatternCompiler,
    last_seen: Option<LastSeen>,
    output: RenderedOutput,
    match_count: usize,
    error: Option<PatternError>,
}

impl PipelineMemo {
    /// Create an empty memo. The first refresh always runs the pipeline.
    pub fn new(compiler: PatternCompiler) -> Self {
        Self {
            compiler,
            last_seen: None,
            output: RenderedOutput::default(),
            match_count: 0,
            error: None,
        }
    }

    /// Bring the output up to date with `pattern` and `document`.
    pub fn refresh(&mut self, pattern: &str, document: &str) -> Refresh {
        if self.error.is_none() && self.is_current(pattern, document) {
            return Refresh::Unchanged;
        }

        let compiled = match self.compiler.compile(pattern) {
            Ok(compiled) => compiled,
            Err(err) => {
                debug!(pattern, error = %err.summary(), "Pattern rejected");
                self.error = Some(err);
                return Refresh::Rejected;
            }
        };

        let spans = extract_matches(&compiled, document);
        let output = render_highlights(document, &spans);
        if output.is_truncated() {
            warn!(
                pattern,
                spans = spans.len(),
                "Match spans out of order, highlight truncated"
            );
        }
        debug!(
            pattern,
            document_len = document.len(),
            matches = spans.len(),
            "Pipeline recomputed"
        );

        self.output = output;
        self.match_count = spans.len();
        self.error = None;
        self.last_seen = Some(LastSeen {
            pattern: pattern.to_owned(),
            document: document.to_owned(),
        });
        Refresh::Recomputed
    }

    /// Output of the last successful run.
    pub fn output(&self) -> &RenderedOutput {
        &self.output
    }

    /// Number of spans found by the last successful run.
    pub fn match_count(&self) -> usize {
        self.match_count
    }

    /// Diagnostic for the current pattern, if it does not compile.
    pub fn error(&self) -> Option<&PatternError> {
        self.error.as_ref()
    }

    fn is_current(&self, pattern: &str, document: &str) -> bool {
        self.last_seen
            .as_ref()
            .is_some_and(|seen| seen.pattern == pattern && seen.document == document)
    }
}

impl Default for PipelineMemo {
    fn default() -> Self {
        Self::new(PatternCompiler::default())
    }
}
