// Unit tests for logger module initialization logic

use crate::error::LoggerError;
use crate::logger::{LOG_FILE_NAME, initialize, initialize_internal};

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: Both an application and its tests may initialize logging.
/// A second call must not try to install a second global logger.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed,
/// causing fern to fail when setting the global logger twice. Also pins the
/// `[timestamp - LEVEL] target: message` line written to the log file.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok_and_writes_file() {
    // GIVEN: A valid temporary directory
    let dir = TempDir::new().unwrap();

    // WHEN: Calling initialize twice
    let result1 = initialize(dir.path());
    let result2 = initialize(dir.path());

    // THEN: Both Ok
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(
        result2.is_ok(),
        "Second initialization should succeed (idempotent)"
    );

    log::info!(target: "trello_core::logger_test", "file line marker");
    let contents = fs::read_to_string(dir.path().join(LOG_FILE_NAME)).unwrap();
    assert!(contents.contains(" - INFO] trello_core::logger_test: file line marker"));
}

/// **VALUE**: Verifies that an unwritable log directory yields an error, not a panic.
///
/// **BUG THIS CATCHES**: Would catch `fern::log_file()` being unwrapped.
#[test]
fn given_invalid_log_dir_when_initialize_internal_called_then_returns_log_file_error() {
    // GIVEN: A path that cannot hold a file on Unix-like systems
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN: Building the dispatch
    let result = initialize_internal(&invalid_dir);

    // THEN: LogFile error before any global state is touched
    assert!(matches!(result, Err(LoggerError::LogFile { .. })));
}
