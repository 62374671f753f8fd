// Unit tests for logger module initialization logic

use crate::logger::{LOG_FILE_NAME, initialize, initialize_internal};

use std::path::PathBuf;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't fail.
///
/// **WHY THIS MATTERS**: Tests and the CLI entry point may both initialize
/// logging. A second call must not panic on the already-installed logger.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed,
/// causing fern to fail when setting a global logger twice.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A valid temporary directory
    let temp_dir = tempfile::TempDir::new().unwrap();

    // WHEN: Calling initialize twice
    let result1 = initialize(temp_dir.path());
    let result2 = initialize(temp_dir.path());

    // THEN: Both return Ok (second one logs a warning)
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(
        result2.is_ok(),
        "Second initialization should be idempotent"
    );
}

/// **VALUE**: An unusable log directory yields an error, not a panic.
///
/// **BUG THIS CATCHES**: Would catch `fern::log_file()` or directory creation
/// being unwrapped.
#[test]
fn given_invalid_log_dir_when_initialized_then_returns_app_error() {
    // GIVEN: A path below a file, which can never be a directory
    let temp_dir = tempfile::TempDir::new().unwrap();
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, "x").unwrap();
    let invalid_dir: PathBuf = blocker.join("logs");

    // WHEN: Initializing against it
    let result = initialize_internal(&invalid_dir);

    // THEN: An App error is returned and no log file exists
    let err = result.unwrap_err();
    assert!(format!("{err:?}").contains("App"));
    assert!(!invalid_dir.join(LOG_FILE_NAME).exists());
}
