//! Stdin-based document source for piped input.

use crate::model::error::InputError;
use std::io::{IsTerminal, Read};

/// Piped stdin, read to EOF in one go.
///
/// Unlike a streaming source there is no polling: the document is loaded
/// before the TUI starts and never grows afterwards.
pub struct StdinSource<R: Read> {
    reader: R,
}

impl StdinSource<std::io::Stdin> {
    /// Wrap the process's stdin if it is piped.
    ///
    /// Returns `None` when stdin is an interactive terminal, in which case
    /// the document starts empty.
    pub fn detect() -> Option<Self> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            None
        } else {
            Some(Self { reader: stdin })
        }
    }
}

impl<R: Read> StdinSource<R> {
    /// Create StdinSource from any reader, bypassing the terminal check.
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Read everything up to EOF.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if the read fails before EOF.
    pub fn read_all(mut self) -> Result<String, InputError> {
        let mut bytes = Vec::new();
        self.reader.read_to_end(&mut bytes)?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }
}
