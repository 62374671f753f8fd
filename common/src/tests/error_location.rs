use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line, and column.
///
/// **WHY THIS MATTERS**: Every error in the workspace carries an `ErrorLocation`.
/// If capture breaks, request failures and token store errors lose the pointer
/// back to the code that raised them.
///
/// **BUG THIS CATCHES**: Would catch if `Location::caller()` stops being
/// propagated or file path extraction breaks.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN / WHEN: Creating ErrorLocation from the current call site
    let expected_line = line!() + 1;
    let location = ErrorLocation::from(Location::caller());

    // THEN: Should point at this test file
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert_eq!(
        location.line, expected_line,
        "Should capture correct line number"
    );
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies Display renders the bracketed `[file:line:column]` form.
///
/// **WHY THIS MATTERS**: Error messages end with this suffix; log readers grep for it.
///
/// **BUG THIS CATCHES**: Would catch a format change that drops brackets or fields.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: An ErrorLocation
    let location = ErrorLocation::from(Location::caller());

    // WHEN: Formatting as string
    let formatted = format!("{}", location);

    // THEN: Should produce "[file:line:column]"
    assert!(formatted.starts_with('['), "Should start with '['");
    assert!(formatted.ends_with(']'), "Should end with ']'");
    assert!(formatted.contains(&location.line.to_string()));
    assert!(formatted.contains(&location.column.to_string()));
    assert_eq!(
        formatted.matches(':').count(),
        2,
        "Should have exactly 2 colons"
    );
}

/// **VALUE**: Verifies `#[track_caller]` propagation gives each call site its own line.
///
/// **WHY THIS MATTERS**: Error constructors rely on `#[track_caller]` so the location
/// names the failing request, not the constructor.
///
/// **BUG THIS CATCHES**: Would catch if propagation stopped and every error pointed
/// at the same helper.
#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    // GIVEN: A helper function that captures location
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::from(Location::caller())
    }

    // WHEN: Capturing location from different call sites
    let loc1 = capture_location();
    let loc2 = capture_location();

    // THEN: Same file, consecutive lines
    assert_eq!(loc1.file, loc2.file, "Should have same file");
    assert_eq!(loc1.line + 1, loc2.line, "Lines should be sequential");
}
