use hrdesk::commands::{jobs, session};
use hrdesk::error::HrDeskError;
use hrdesk::state::{AppState, StateCommand};

use client_core::{ApiClient, MemoryTokenStore, TokenStore};
use models::{CredentialPairBuilder, User};

use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Integration tests for AppState + command handlers + client-core
// These drive the real command layer against a mock HR API
// ============================================================================

fn state_for(server: &MockServer, store: Arc<MemoryTokenStore>) -> AppState {
    let client = ApiClient::new(&format!("{}/api/v1", server.uri()), store).unwrap();
    AppState::new(client)
}

fn logged_in_store(access: &str) -> Arc<MemoryTokenStore> {
    let pair = CredentialPairBuilder::default()
        .with_access_token(access)
        .build()
        .unwrap();
    Arc::new(MemoryTokenStore::with_credentials(&pair))
}

fn user_json() -> serde_json::Value {
    json!({"id": 1, "username": "hr", "createdAt": "2025-01-01T00:00:00"})
}

/// **VALUE**: The login command persists tokens and records the user in state.
///
/// **WHY THIS MATTERS**: Every later command depends on both. A login that
/// only stores tokens would show "not logged in" in the shell header.
///
/// **BUG THIS CATCHES**: Would catch the `me` lookup or the `SetUser` update
/// being dropped from the login flow.
#[tokio::test]
async fn given_valid_login_when_command_runs_then_tokens_and_user_set() {
    // GIVEN: An API accepting the credentials
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"accessToken": "access-1", "refreshToken": "refresh-1"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(&server)
        .await;
    let store = Arc::new(MemoryTokenStore::new());
    let state = state_for(&server, store.clone());

    // WHEN: Running the login command
    let user = session::login(&state, "hr", "secret").await.unwrap();

    // THEN: Tokens are stored and the user is in state
    assert_eq!(user.username, "hr");
    assert!(store.is_authenticated().unwrap());
    assert_eq!(state.current_user().await.map(|u| u.id), Some(1));
}

/// **VALUE**: A rejected password is an ordinary API error, not a lost session.
///
/// **WHY THIS MATTERS**: `Unauthenticated` tells the shell the session expired
/// and prints a "sign in again" hint, which makes no sense on the login form.
///
/// **BUG THIS CATCHES**: Would catch login failures flowing through the
/// session-expiry mapping and clearing an already signed-in user.
#[tokio::test]
async fn given_wrong_password_when_login_runs_then_api_error_keeps_user() {
    // GIVEN: An API rejecting the password and a user already in state
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "帳號或密碼錯誤"})))
        .mount(&server)
        .await;
    let store = logged_in_store("access-1");
    let state = state_for(&server, store.clone());
    state
        .update(StateCommand::SetUser(User {
            id: 1,
            username: "hr".to_string(),
            created_at: "2025-01-01T00:00:00".to_string(),
        }))
        .await
        .unwrap();

    // WHEN: Logging in with the wrong password
    let err = session::login(&state, "hr", "wrong").await.unwrap_err();

    // THEN: Api error with the detail, session untouched
    assert!(!err.is_unauthenticated());
    assert!(matches!(err, HrDeskError::Api { status: 401, .. }));
    assert_eq!(err.user_message(), "帳號或密碼錯誤");
    assert!(store.is_authenticated().unwrap());
    assert_eq!(state.current_user().await.map(|u| u.id), Some(1));
}

#[tokio::test]
async fn given_rejected_registration_when_register_runs_then_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Registration closed"})),
        )
        .mount(&server)
        .await;
    let state = state_for(&server, Arc::new(MemoryTokenStore::new()));

    let err = session::register(&state, "hr", "secret").await.unwrap_err();

    assert!(matches!(err, HrDeskError::Api { status: 401, .. }));
    assert_eq!(err.user_message(), "Registration closed");
}

/// **VALUE**: An expired session surfaces as `Unauthenticated` and clears both
/// the stored tokens and the signed-in user.
///
/// **WHY THIS MATTERS**: The shell redirects to login on this variant. Leaving
/// the user in state would keep showing a stale name next to a login form.
///
/// **BUG THIS CATCHES**: Would catch `map_api_error` not sending `ClearUser`.
#[tokio::test]
async fn given_expired_session_when_listing_jobs_then_unauthenticated_and_user_cleared() {
    // GIVEN: A signed-in user whose token the API rejects, with no refresh token
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Token expired"})))
        .mount(&server)
        .await;
    let store = logged_in_store("expired");
    let state = state_for(&server, store.clone());
    state
        .update(StateCommand::SetUser(User {
            id: 1,
            username: "hr".to_string(),
            created_at: "2025-01-01T00:00:00".to_string(),
        }))
        .await
        .unwrap();

    // WHEN: Listing jobs
    let err = jobs::list_jobs(&state).await.unwrap_err();

    // THEN: Session is gone everywhere
    assert!(matches!(err, HrDeskError::Unauthenticated { .. }));
    assert!(!store.is_authenticated().unwrap());
    assert!(state.current_user().await.is_none());
}

#[tokio::test]
async fn given_missing_job_when_fetched_then_api_error_keeps_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Job not found"})))
        .mount(&server)
        .await;
    let store = logged_in_store("access-1");
    let state = state_for(&server, store.clone());

    let err = jobs::get_job(&state, 42).await.unwrap_err();

    assert!(matches!(err, HrDeskError::Api { status: 404, .. }));
    assert!(store.is_authenticated().unwrap());
}

#[tokio::test]
async fn given_stored_token_when_current_user_requested_then_session_restored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;
    let state = state_for(&server, logged_in_store("access-1"));

    let first = session::current_user(&state).await.unwrap();
    // served from state, no second `me` call
    let second = session::current_user(&state).await.unwrap();

    assert_eq!(first.map(|u| u.username), Some("hr".to_string()));
    assert_eq!(second.map(|u| u.id), Some(1));
}

#[tokio::test]
async fn given_no_session_when_current_user_requested_then_none() {
    let server = MockServer::start().await;
    let state = state_for(&server, Arc::new(MemoryTokenStore::new()));

    assert!(session::current_user(&state).await.unwrap().is_none());
}

#[tokio::test]
async fn given_signed_in_user_when_logout_then_store_and_state_cleared() {
    let server = MockServer::start().await;
    let store = logged_in_store("access-1");
    let state = state_for(&server, store.clone());

    session::logout(&state).await.unwrap();

    assert!(!store.is_authenticated().unwrap());
    assert!(state.current_user().await.is_none());
}
