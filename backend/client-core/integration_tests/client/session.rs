use super::helpers::{
    NoAuthorization, api_path, client_for, store_with, stored_access, stored_refresh,
};

use client_core::MemoryTokenStore;

use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_json() -> serde_json::Value {
    json!({"id": 1, "username": "hr", "createdAt": "2025-01-01T00:00:00"})
}

/// **VALUE**: Logging in stores both returned tokens.
///
/// **BUG THIS CATCHES**: Would catch `login` returning the pair without
/// persisting it, which leaves every later call unauthenticated.
#[tokio::test]
async fn given_valid_credentials_when_login_then_tokens_persisted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/auth/login")))
        .and(body_json(json!({"username": "hr", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "access-1",
            "refreshToken": "refresh-1",
            "tokenType": "bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let store = Arc::new(MemoryTokenStore::new());
    let client = client_for(&server, store.clone());

    let credentials = client.login("hr", "secret").await.unwrap();

    assert!(credentials.has_refresh_token());
    assert_eq!(stored_access(&store).as_deref(), Some("access-1"));
    assert_eq!(stored_refresh(&store).as_deref(), Some("refresh-1"));
}

#[tokio::test]
async fn given_taken_username_when_register_then_conflict_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/auth/register")))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"detail": "帳戶名稱已存在"})))
        .mount(&server)
        .await;
    let client = client_for(&server, Arc::new(MemoryTokenStore::new()));

    let err = client.register("hr", "secret").await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(409));
    assert_eq!(err.failure().unwrap().display_detail(), "帳戶名稱已存在");
}

/// **VALUE**: `me` sends the stored token even though it lives under `/auth/`.
///
/// **BUG THIS CATCHES**: Would catch the auth-path exemption stripping the
/// bearer from the one auth endpoint that needs it.
#[tokio::test]
async fn given_stored_token_when_me_called_then_bearer_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/auth/me")))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server, store_with("access-1", None));

    let user = client.me().await.unwrap();

    assert_eq!(user.username, "hr");
}

/// **VALUE**: Session restore without a token does no network I/O.
///
/// **WHY THIS MATTERS**: On first launch there is nothing to restore. A
/// request would only produce a spurious 401 in the logs.
///
/// **BUG THIS CATCHES**: Would catch `restore_session` calling `me` blindly.
#[tokio::test]
async fn given_no_stored_token_when_restore_session_then_none_without_request() {
    let server = MockServer::start().await;
    let client = client_for(&server, Arc::new(MemoryTokenStore::new()));

    let user = client.restore_session().await.unwrap();

    assert!(user.is_none());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_valid_stored_token_when_restore_session_then_user_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/auth/me")))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(&server)
        .await;
    let store = store_with("access-1", Some("refresh-1"));
    let client = client_for(&server, store.clone());

    let user = client.restore_session().await.unwrap();

    assert_eq!(user.map(|u| u.id), Some(1));
    assert_eq!(stored_access(&store).as_deref(), Some("access-1"));
}

/// **VALUE**: A failed restore clears the stored tokens.
///
/// **BUG THIS CATCHES**: Would catch a stale session surviving restart, which
/// shows the app as logged in while every call fails.
#[tokio::test]
async fn given_rejected_stored_token_when_restore_session_then_cleared() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/auth/me")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid token"})))
        .mount(&server)
        .await;
    let store = store_with("expired", Some("refresh-1"));
    let client = client_for(&server, store.clone());

    let user = client.restore_session().await.unwrap();

    assert!(user.is_none());
    assert_eq!(stored_access(&store), None);
    assert_eq!(stored_refresh(&store), None);
}

#[tokio::test]
async fn given_refresh_token_when_refresh_called_then_pair_returned_without_storing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/auth/refresh")))
        .and(NoAuthorization)
        .and(body_json(json!({"refreshToken": "refresh-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "new"})))
        .expect(1)
        .mount(&server)
        .await;
    let store = store_with("old", Some("refresh-1"));
    let client = client_for(&server, store.clone());
    let refresh_token = common::RedactedToken::new("refresh-1");

    let credentials = client.refresh(&refresh_token).await.unwrap();

    assert_eq!(credentials.access_token().as_str(), "new");
    assert_eq!(stored_access(&store).as_deref(), Some("old"));
}

#[tokio::test]
async fn given_logged_in_store_when_logout_then_tokens_cleared() {
    let server = MockServer::start().await;
    let store = store_with("access-1", Some("refresh-1"));
    let client = client_for(&server, store.clone());

    client.logout().unwrap();

    assert_eq!(stored_access(&store), None);
    assert_eq!(stored_refresh(&store), None);
}
