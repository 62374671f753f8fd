use crate::CredentialPairBuilder;
use crate::ModelError;

/// **VALUE**: Verifies a complete pair builds and exposes both tokens.
///
/// **WHY THIS MATTERS**: Login and refresh responses are turned into pairs through
/// this builder before they reach the token store.
///
/// **BUG THIS CATCHES**: Would catch if the refresh token were dropped on build.
#[test]
fn given_access_and_refresh_when_built_then_pair_holds_both() {
    // GIVEN / WHEN
    let pair = CredentialPairBuilder::default()
        .with_access_token("access-1")
        .with_refresh_token("refresh-1")
        .build()
        .expect("pair should build");

    // THEN
    assert_eq!(pair.access_token().as_str(), "access-1");
    assert_eq!(pair.refresh_token().map(|t| t.as_str()), Some("refresh-1"));
    assert!(pair.has_refresh_token());
}

/// **VALUE**: Verifies the refresh token is optional.
///
/// **WHY THIS MATTERS**: The refresh endpoint may omit a rotated refresh token;
/// the pair must still be valid with only an access token.
#[test]
fn given_only_access_token_when_built_then_refresh_is_absent() {
    let pair = CredentialPairBuilder::default()
        .with_access_token("access-only")
        .build()
        .expect("pair should build");

    assert!(pair.refresh_token().is_none());
}

/// **VALUE**: Enforces the non-empty access token invariant.
///
/// **WHY THIS MATTERS**: A stored empty access token would be attached as
/// `Authorization: Bearer ` on every request.
///
/// **BUG THIS CATCHES**: Would catch if blank validation were removed.
#[test]
fn given_blank_access_token_when_built_then_returns_validation_error() {
    // GIVEN: Whitespace access token
    let result = CredentialPairBuilder::default()
        .with_access_token("   ")
        .with_refresh_token("refresh")
        .build();

    // THEN: Validation error mentioning the access token
    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert!(message.contains("Access token"));
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[test]
fn given_missing_access_token_when_built_then_returns_validation_error() {
    let result = CredentialPairBuilder::default()
        .with_refresh_token("refresh")
        .build();

    assert!(result.is_err(), "Access token is mandatory");
}

/// **VALUE**: Verifies a blank refresh token is normalized to absent.
///
/// **WHY THIS MATTERS**: Storing an empty refresh token would later trigger a
/// refresh call that can only fail.
#[test]
fn given_blank_refresh_token_when_built_then_refresh_is_absent() {
    let pair = CredentialPairBuilder::default()
        .with_access_token("access")
        .with_optional_refresh_token(Some(""))
        .build()
        .expect("pair should build");

    assert!(pair.refresh_token().is_none());
}

#[test]
fn given_pair_when_debug_formatted_then_tokens_are_redacted() {
    let pair = CredentialPairBuilder::default()
        .with_access_token("very-secret")
        .with_refresh_token("also-secret")
        .build()
        .expect("pair should build");

    let debug = format!("{pair:?}");
    assert!(!debug.contains("very-secret"));
    assert!(!debug.contains("also-secret"));
}
