//! Initial document sources.
//!
//! The document starts with whatever was piped into stdin, or empty when
//! stdin is a terminal.

use crate::model::error::InputError;

pub mod stdin;

pub use stdin::StdinSource;

/// Read the initial document from piped stdin.
///
/// # Errors
///
/// Returns `InputError::Io` if stdin is piped but cannot be read.
pub fn initial_document() -> Result<Option<String>, InputError> {
    StdinSource::detect()
        .map(StdinSource::read_all)
        .transpose()
}

/// Split document text into the lines a text-area widget holds.
///
/// Splits on `\n` only, so a trailing newline yields a trailing empty line
/// and joining the result with `\n` restores the input (minus the `\r` of
/// CRLF line endings, which is dropped).
pub fn document_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lines_round_trips_lf_text() {
        let text = "one\ntwo\n\nthree";
        assert_eq!(document_lines(text).join("\n"), text);
    }

    #[test]
    fn document_lines_keeps_trailing_empty_line() {
        assert_eq!(document_lines("a\n"), vec!["a".to_string(), String::new()]);
    }

    #[test]
    fn document_lines_of_empty_text_is_one_empty_line() {
        assert_eq!(document_lines(""), vec![String::new()]);
    }

    #[test]
    fn document_lines_drops_carriage_returns() {
        assert_eq!(
            document_lines("a\r\nb\r\n"),
            vec!["a".to_string(), "b".to_string(), String::new()]
        );
    }
}
