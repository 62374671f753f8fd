use crate::state::{AppState, StateCommand};

use client_core::{ApiClient, MemoryTokenStore};
use models::User;

use std::sync::Arc;

fn state() -> AppState {
    let client = ApiClient::new(
        "http://localhost:8000/api/v1",
        Arc::new(MemoryTokenStore::new()),
    )
    .unwrap();
    AppState::new(client)
}

fn user(id: i64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        created_at: "2025-01-01T00:00:00".to_string(),
    }
}

#[tokio::test]
async fn given_fresh_state_when_read_then_no_user() {
    assert!(state().current_user().await.is_none());
}

/// **VALUE**: An update is visible as soon as `update` returns.
///
/// **WHY THIS MATTERS**: `login` sets the user and the next command reads it.
/// If the actor applied updates lazily, `whoami` right after login would
/// report nobody.
///
/// **BUG THIS CATCHES**: Would catch the acknowledgement being dropped so
/// `update` returns before the actor has written.
#[tokio::test]
async fn given_set_user_when_update_returns_then_user_visible() {
    let state = state();

    state
        .update(StateCommand::SetUser(user(1, "hr")))
        .await
        .unwrap();

    assert_eq!(
        state.current_user().await.map(|u| u.username),
        Some("hr".to_string())
    );
}

#[tokio::test]
async fn given_signed_in_user_when_cleared_then_no_user() {
    let state = state();
    state
        .update(StateCommand::SetUser(user(1, "hr")))
        .await
        .unwrap();

    state.update(StateCommand::ClearUser).await.unwrap();

    assert!(state.current_user().await.is_none());
}

#[tokio::test]
async fn given_cloned_state_when_updated_then_clones_share_user() {
    let state = state();
    let clone = state.clone();

    clone
        .update(StateCommand::SetUser(user(2, "lee")))
        .await
        .unwrap();

    assert_eq!(state.current_user().await.map(|u| u.id), Some(2));
}
