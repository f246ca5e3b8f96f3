//! Tracing subscriber initialization.
//!
//! The terminal belongs to the TUI and stdout carries the program's result,
//! so logs go to a file. Follow them with `tail -f` from another terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filter directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Log path has no usable file name component
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Directory and file name a log path resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    /// Directory holding the log file (created on init).
    pub directory: PathBuf,
    /// File name inside `directory`.
    pub file_name: String,
}

impl LogTarget {
    /// Split `log_path` into directory and file name.
    ///
    /// A bare file name resolves to the current directory.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` when the path has no UTF-8 file name.
    pub fn resolve(log_path: &Path) -> Result<Self, LoggingError> {
        let file_name = log_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

        let directory = match log_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(Self {
            directory,
            file_name: file_name.to_string(),
        })
    }
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Respects `RUST_LOG`, defaulting to [`DEFAULT_FILTER`]. Creates the log
/// directory if it doesn't exist.
///
/// # Errors
///
/// Returns `LoggingError` if the path is unusable, the directory cannot be
/// created, or a subscriber was already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let target = LogTarget::resolve(log_path)?;

    std::fs::create_dir_all(&target.directory).map_err(|source| {
        LoggingError::DirectoryCreation {
            path: target.directory.clone(),
            source,
        }
    })?;

    let file_appender = tracing_appender::rolling::never(&target.directory, &target.file_name);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false) // No ANSI colors in log files
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    fn resolve_splits_directory_and_file() {
        let target = LogTarget::resolve(Path::new("/var/log/rgx/rgx.log")).unwrap();
        assert_eq!(target.directory, PathBuf::from("/var/log/rgx"));
        assert_eq!(target.file_name, "rgx.log");
    }

    #[test]
    fn resolve_bare_file_name_uses_current_directory() {
        let target = LogTarget::resolve(Path::new("rgx.log")).unwrap();
        assert_eq!(target.directory, PathBuf::from("."));
        assert_eq!(target.file_name, "rgx.log");
    }

    #[test]
    fn resolve_rejects_path_without_file_name() {
        let result = LogTarget::resolve(Path::new("/"));
        assert!(matches!(result, Err(LoggingError::InvalidPath(_))));
    }

    #[test]
    #[serial(tracing_init)]
    fn init_creates_log_directory_if_missing() {
        let test_dir = std::env::temp_dir().join("rgx_test_logs_create");
        let log_file = test_dir.join("nested").join("test.log");
        let _ = fs::remove_dir_all(&test_dir);

        // May fail with SubscriberAlreadySet; the directory is created first.
        let _ = init(&log_file);

        assert!(
            log_file.parent().unwrap().exists(),
            "Log directory should be created: {:?}",
            test_dir
        );
        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_reports_subscriber_already_set() {
        let test_dir = std::env::temp_dir().join("rgx_test_logs_twice");
        let log_file = test_dir.join("twice.log");

        let _ = init(&log_file);
        let second = init(&log_file);

        assert!(
            matches!(second, Err(LoggingError::SubscriberAlreadySet)),
            "Second init must fail, got: {:?}",
            second
        );
        let _ = fs::remove_dir_all(&test_dir);
    }
}
