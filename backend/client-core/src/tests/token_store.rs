use crate::error::TokenStoreError;
use crate::token_store::{FileTokenStore, MemoryTokenStore, TokenStore};

use models::{CredentialPair, CredentialPairBuilder};

use tempfile::TempDir;

fn pair(access: &str, refresh: Option<&str>) -> CredentialPair {
    CredentialPairBuilder::default()
        .with_access_token(access)
        .with_optional_refresh_token(refresh)
        .build()
        .unwrap()
}

#[test]
fn given_empty_memory_store_when_read_then_unauthenticated() {
    let store = MemoryTokenStore::new();

    assert!(store.access_token().unwrap().is_none());
    assert!(store.refresh_token().unwrap().is_none());
    assert!(!store.is_authenticated().unwrap());
    assert!(store.credentials().unwrap().is_none());
}

/// **VALUE**: A pair without a refresh token keeps the previously stored one.
///
/// **WHY THIS MATTERS**: Servers that do not rotate refresh tokens return only
/// a new access token. Overwriting with "nothing" would log the user out at the
/// next expiry.
///
/// **BUG THIS CATCHES**: Would catch `set_tokens` clearing the refresh slot
/// whenever the incoming pair has none.
#[test]
fn given_pair_without_refresh_when_set_then_existing_refresh_token_kept() {
    let store = MemoryTokenStore::with_credentials(&pair("a1", Some("r1")));

    store.set_tokens(&pair("a2", None)).unwrap();

    assert_eq!(store.access_token().unwrap().unwrap().as_str(), "a2");
    assert_eq!(store.refresh_token().unwrap().unwrap().as_str(), "r1");
}

#[test]
fn given_populated_memory_store_when_cleared_then_both_tokens_removed() {
    let store = MemoryTokenStore::with_credentials(&pair("a1", Some("r1")));

    store.clear().unwrap();

    assert!(store.access_token().unwrap().is_none());
    assert!(store.refresh_token().unwrap().is_none());
}

#[test]
fn given_missing_file_when_read_then_unauthenticated() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::in_dir(dir.path());

    assert!(store.access_token().unwrap().is_none());
    assert!(!store.path().exists());
}

/// **VALUE**: Tokens written by one store instance are visible to the next.
///
/// **WHY THIS MATTERS**: The CLI is a new process per command. Persistence is
/// what keeps the user logged in between invocations.
///
/// **BUG THIS CATCHES**: Would catch writes that never reach disk or a key
/// name mismatch between writer and reader.
#[test]
fn given_tokens_written_when_new_store_opened_then_tokens_survive() {
    let dir = TempDir::new().unwrap();
    FileTokenStore::in_dir(dir.path())
        .set_tokens(&pair("access-1", Some("refresh-1")))
        .unwrap();

    let reopened = FileTokenStore::in_dir(dir.path());

    assert_eq!(
        reopened.access_token().unwrap().unwrap().as_str(),
        "access-1"
    );
    assert_eq!(
        reopened.refresh_token().unwrap().unwrap().as_str(),
        "refresh-1"
    );
}

#[test]
fn given_file_store_when_written_then_uses_fixed_key_names() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::in_dir(dir.path());
    store.set_tokens(&pair("access-1", Some("refresh-1"))).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();

    assert_eq!(raw["access_token"], "access-1");
    assert_eq!(raw["refresh_token"], "refresh-1");
}

#[test]
fn given_file_store_when_cleared_then_both_keys_removed() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::in_dir(dir.path());
    store.set_tokens(&pair("access-1", Some("refresh-1"))).unwrap();

    store.clear().unwrap();

    assert!(store.access_token().unwrap().is_none());
    assert!(store.refresh_token().unwrap().is_none());
}

/// **VALUE**: A corrupt token file is reported, not treated as logged out.
///
/// **BUG THIS CATCHES**: Would catch parse failures being swallowed, which
/// would hide a broken install behind a confusing "please log in" loop.
#[test]
fn given_corrupt_file_when_read_then_parse_error() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::in_dir(dir.path());
    std::fs::write(store.path(), "{not json").unwrap();

    let result = store.access_token();

    assert!(matches!(result, Err(TokenStoreError::Parse { .. })));
}

#[test]
fn given_blank_value_in_file_when_read_then_treated_as_absent() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::in_dir(dir.path());
    std::fs::write(store.path(), r#"{"access_token": "  "}"#).unwrap();

    assert!(store.access_token().unwrap().is_none());
}

/// **VALUE**: The token file is private to its owner.
///
/// **WHY THIS MATTERS**: It holds bearer and refresh tokens. With the default
/// umask any local user could read them and act as the signed-in HR user.
///
/// **BUG THIS CATCHES**: Would catch the temp-file write falling back to the
/// default mode, or a stale world-readable temp file keeping its bits.
#[cfg(unix)]
#[test]
fn given_tokens_written_when_file_inspected_then_owner_only_permissions() {
    use std::os::unix::fs::PermissionsExt;

    // GIVEN: A stale world-readable temp file from an interrupted write
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::in_dir(dir.path());
    let stale_temp = store.path().with_extension("json.tmp");
    std::fs::write(&stale_temp, "{}").unwrap();
    std::fs::set_permissions(&stale_temp, std::fs::Permissions::from_mode(0o644)).unwrap();

    // WHEN: Writing tokens
    store.set_tokens(&pair("access-1", Some("refresh-1"))).unwrap();

    // THEN: The token file is 0600
    let mode = std::fs::metadata(store.path())
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}
