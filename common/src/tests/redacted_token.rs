use crate::RedactedToken;

/// **VALUE**: Verifies tokens never leak through Debug or Display.
///
/// **WHY THIS MATTERS**: Credential pairs end up inside error values and log
/// lines. A leaked bearer token grants full API access.
///
/// **BUG THIS CATCHES**: Would catch a derived Debug replacing the manual impl.
#[test]
fn given_token_when_formatted_then_value_is_hidden() {
    // GIVEN: A token with a recognizable value
    let token = RedactedToken::new("secret-access-token");

    // WHEN: Formatting with Debug and Display
    let debug = format!("{:?}", token);
    let display = format!("{}", token);

    // THEN: Neither contains the secret
    assert!(!debug.contains("secret-access-token"));
    assert!(!display.contains("secret-access-token"));
    assert_eq!(token.as_str(), "secret-access-token");
    assert_eq!(token.len(), 19);
}

/// **VALUE**: Verifies serde serialization is refused.
///
/// **WHY THIS MATTERS**: Serializing a struct holding a token (e.g. an error sent to
/// the UI) must not silently emit the credential.
///
/// **BUG THIS CATCHES**: Would catch a derived Serialize.
#[test]
fn given_token_when_serialized_then_returns_error() {
    let token = RedactedToken::new("abc");
    let result = serde_json::to_string(&token);
    assert!(result.is_err(), "Serialization must be refused");
}

#[test]
fn given_whitespace_token_when_checked_then_is_blank() {
    assert!(RedactedToken::new("   ").is_blank());
    assert!(RedactedToken::new("").is_empty());
    assert!(!RedactedToken::new("x").is_blank());
}
