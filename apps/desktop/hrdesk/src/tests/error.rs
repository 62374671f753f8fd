// Unit tests for error module
// Covers serialization and the mapping from client errors

use crate::error::HrDeskError;

use client_core::error::{ApiClientError, RequestFailure};
use common::HttpStatusCode;

use serde_json::json;

/// **VALUE**: Errors serialize with a `type` tag a front end can branch on.
///
/// **WHY THIS MATTERS**: The desktop shell receives errors as JSON. Without the
/// tag it cannot tell "log in again" apart from "show this message".
///
/// **BUG THIS CATCHES**: Would catch the `#[serde(tag, content)]` attribute
/// being removed or a non-serializable field being added.
#[test]
fn given_unauthenticated_error_when_serialized_then_tagged_json() {
    // GIVEN: An Unauthenticated error
    let err = HrDeskError::unauthenticated("Session expired");

    // WHEN: Serializing to JSON
    let value = serde_json::to_value(&err).unwrap();

    // THEN: The variant is the tag and the message is in data
    assert_eq!(value["type"], "Unauthenticated");
    assert_eq!(value["data"]["message"], "Session expired");
    assert!(value["data"]["location"]["file"].is_string());
}

/// **VALUE**: An unresolved 401 becomes `Unauthenticated`, other statuses `Api`.
///
/// **BUG THIS CATCHES**: Would catch expired sessions being shown as a generic
/// API error, leaving the user stuck on a screen that can never load.
#[test]
fn given_request_failures_when_converted_then_mapped_by_status() {
    let unauthorized = ApiClientError::request(RequestFailure::new(
        HttpStatusCode(401),
        json!("Not authenticated"),
    ));
    let not_found = ApiClientError::request(RequestFailure::new(
        HttpStatusCode(404),
        json!("Job not found"),
    ));

    let unauthorized = HrDeskError::from(unauthorized);
    let not_found = HrDeskError::from(not_found);

    assert!(unauthorized.is_unauthenticated());
    assert_eq!(unauthorized.user_message(), "Not authenticated");
    assert!(matches!(not_found, HrDeskError::Api { status: 404, .. }));
    assert_eq!(not_found.user_message(), "Job not found");
}

#[test]
fn given_transport_error_when_converted_then_core_variant() {
    let err = ApiClientError::invalid_path("request path must not be empty");

    let mapped = HrDeskError::from(err);

    assert!(matches!(mapped, HrDeskError::Core { .. }));
    assert!(mapped.to_string().starts_with("Core Error:"));
}

/// **VALUE**: A 401 from a credentials check maps to `Api`, keeping the status.
///
/// **BUG THIS CATCHES**: Would catch a wrong password being reported as an
/// expired session with a "sign in again" hint.
#[test]
fn given_rejected_credentials_when_mapped_as_credentials_check_then_api_variant() {
    let rejected = ApiClientError::request(RequestFailure::new(
        HttpStatusCode(401),
        json!("帳號或密碼錯誤"),
    ));

    let mapped = HrDeskError::from_credentials_check(rejected);

    assert!(!mapped.is_unauthenticated());
    assert!(matches!(mapped, HrDeskError::Api { status: 401, .. }));
    assert_eq!(mapped.user_message(), "帳號或密碼錯誤");
}

#[test]
fn given_non_http_error_when_mapped_as_credentials_check_then_core_variant() {
    let err = ApiClientError::invalid_path("request path must not be empty");

    let mapped = HrDeskError::from_credentials_check(err);

    assert!(matches!(mapped, HrDeskError::Core { .. }));
}
