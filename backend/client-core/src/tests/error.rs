use crate::error::{ApiClientError, RequestFailure};

use common::HttpStatusCode;
use serde_json::{Value, json};

#[test]
fn given_status_when_failure_built_then_message_names_status() {
    let failure = RequestFailure::new(HttpStatusCode(404), json!("Job not found"));

    assert_eq!(failure.message, "API request failed: 404");
    assert_eq!(failure.to_string(), "API request failed: 404");
    assert!(!failure.is_unauthorized());
}

/// **VALUE**: `display_detail` yields something a user can read for every
/// detail shape the API produces.
///
/// **BUG THIS CATCHES**: Would catch a null detail rendering as `"null"` or a
/// validation array rendering as Rust debug output.
#[test]
fn given_detail_shapes_when_displayed_then_readable_text() {
    let text = RequestFailure::new(HttpStatusCode(409), json!("帳戶名稱已存在"));
    let structured = RequestFailure::new(HttpStatusCode(422), json!([{"msg": "bad"}]));
    let empty = RequestFailure::new(HttpStatusCode(500), Value::Null);

    assert_eq!(text.display_detail(), "帳戶名稱已存在");
    assert_eq!(structured.display_detail(), r#"[{"msg":"bad"}]"#);
    assert_eq!(empty.display_detail(), "API request failed: 500");
}

#[test]
fn given_request_error_when_inspected_then_exposes_status_and_failure() {
    let err = ApiClientError::request(RequestFailure::new(HttpStatusCode(401), Value::Null));

    assert_eq!(err.status(), Some(HttpStatusCode(401)));
    assert!(err.is_unauthorized());
    assert!(err.failure().is_some());
}

/// **VALUE**: Errors built through helpers record the caller's location.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` being dropped from the
/// helper, which makes every error point into the error module itself.
#[test]
fn given_invalid_path_helper_when_formatted_then_includes_caller_location() {
    let err = ApiClientError::invalid_path("request path must not be empty");

    let rendered = err.to_string();

    assert!(rendered.contains("Invalid Path Error"));
    assert!(rendered.contains("tests/error.rs"));
    assert_eq!(err.status(), None);
}

#[test]
fn given_json_error_when_converted_then_json_variant() {
    let source = serde_json::from_str::<Value>("{").unwrap_err();

    let err = ApiClientError::from(source);

    assert!(matches!(err, ApiClientError::Json { .. }));
}
