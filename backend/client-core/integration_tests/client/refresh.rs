use super::helpers::{
    NoAuthorization, api_path, client_for, store_with, stored_access, stored_refresh,
};

use client_core::ApiRequest;

use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_refresh(server: &MockServer, response: ResponseTemplate, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(api_path("/auth/refresh")))
        .respond_with(response)
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn mount_jobs_for_token(server: &MockServer, token: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(api_path("/jobs")))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(response)
        .mount(server)
        .await;
}

/// **VALUE**: Without a refresh token a 401 fails immediately and clears the
/// stored access token.
///
/// **WHY THIS MATTERS**: The stale access token would otherwise be sent on
/// every later call and every screen would keep failing.
///
/// **BUG THIS CATCHES**: Would catch a refresh attempt with no refresh token,
/// or a 401 that leaves credentials in place.
#[tokio::test]
async fn given_no_refresh_token_when_unauthorized_then_fails_and_clears_without_refresh() {
    // GIVEN: Only an access token is stored
    let server = MockServer::start().await;
    mount_refresh(&server, ResponseTemplate::new(200), 0).await;
    mount_jobs_for_token(&server, "access-1", ResponseTemplate::new(401)).await;
    let store = store_with("access-1", None);
    let client = client_for(&server, store.clone());

    // WHEN: The API rejects the token
    let err = client.execute(&ApiRequest::get("/jobs")).await.unwrap_err();

    // THEN: A 401 failure is returned and the store is empty
    assert_eq!(err.status().map(|s| s.as_u16()), Some(401));
    assert!(err.is_unauthorized());
    assert_eq!(stored_access(&store), None);
}

/// **VALUE**: The full refresh path: 401, refresh, retry with the new token.
///
/// **WHY THIS MATTERS**: Access tokens are short-lived. Without transparent
/// refresh users would be logged out every few minutes.
///
/// **BUG THIS CATCHES**: Would catch the retry reusing the old token, the new
/// token not being persisted, or the refresh body using the wrong key name.
#[tokio::test]
async fn given_expired_token_when_refresh_succeeds_then_retry_resolves_and_token_persisted() {
    // GIVEN: An expired access token and a valid refresh token
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/auth/refresh")))
        .and(NoAuthorization)
        .and(body_json(json!({"refreshToken": "refresh-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "new"})))
        .expect(1)
        .mount(&server)
        .await;
    mount_jobs_for_token(&server, "old", ResponseTemplate::new(401)).await;
    mount_jobs_for_token(
        &server,
        "new",
        ResponseTemplate::new(200).set_body_json(json!({"ok": true})),
    )
    .await;
    let store = store_with("old", Some("refresh-1"));
    let client = client_for(&server, store.clone());

    // WHEN: Executing a request
    let payload = client.execute(&ApiRequest::get("/jobs")).await.unwrap();

    // THEN: The retried response is returned and the new token is stored
    assert_eq!(payload, json!({"ok": true}));
    assert_eq!(stored_access(&store).as_deref(), Some("new"));
    // not returned by the server, so the old refresh token stays
    assert_eq!(stored_refresh(&store).as_deref(), Some("refresh-1"));
}

#[tokio::test]
async fn given_rotating_refresh_when_refresh_succeeds_then_refresh_token_replaced() {
    let server = MockServer::start().await;
    mount_refresh(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"accessToken": "new", "refreshToken": "refresh-2"})),
        1,
    )
    .await;
    mount_jobs_for_token(&server, "old", ResponseTemplate::new(401)).await;
    mount_jobs_for_token(
        &server,
        "new",
        ResponseTemplate::new(200).set_body_json(json!([])),
    )
    .await;
    let store = store_with("old", Some("refresh-1"));
    let client = client_for(&server, store.clone());

    client.execute(&ApiRequest::get("/jobs")).await.unwrap();

    assert_eq!(stored_refresh(&store).as_deref(), Some("refresh-2"));
}

/// **VALUE**: A retry is attempted at most once.
///
/// **WHY THIS MATTERS**: A server that rejects every token (revoked user) would
/// otherwise cause an endless refresh/retry loop.
///
/// **BUG THIS CATCHES**: Would catch a missing retry budget, and a second 401
/// that leaves the freshly stored tokens behind.
#[tokio::test]
async fn given_retry_still_unauthorized_when_executed_then_fails_once_and_clears() {
    let server = MockServer::start().await;
    mount_refresh(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"accessToken": "new"})),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path(api_path("/jobs")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "revoked"})))
        .expect(2)
        .mount(&server)
        .await;
    let store = store_with("old", Some("refresh-1"));
    let client = client_for(&server, store.clone());

    let err = client.execute(&ApiRequest::get("/jobs")).await.unwrap_err();

    let failure = err.failure().unwrap();
    assert_eq!(failure.status.as_u16(), 401);
    assert_eq!(failure.detail, json!("revoked"));
    assert_eq!(stored_access(&store), None);
    assert_eq!(stored_refresh(&store), None);
}

/// **VALUE**: A retry that fails with a non-401 status still ends the session,
/// and the failure reports the retry's status.
///
/// **BUG THIS CATCHES**: Would catch the clear being keyed on the final status
/// instead of on the unresolved 401.
#[tokio::test]
async fn given_retry_fails_with_server_error_when_executed_then_reports_retry_and_clears() {
    let server = MockServer::start().await;
    mount_refresh(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"accessToken": "new"})),
        1,
    )
    .await;
    mount_jobs_for_token(&server, "old", ResponseTemplate::new(401)).await;
    mount_jobs_for_token(
        &server,
        "new",
        ResponseTemplate::new(500).set_body_string("upstream down"),
    )
    .await;
    let store = store_with("old", Some("refresh-1"));
    let client = client_for(&server, store.clone());

    let err = client.execute(&ApiRequest::get("/jobs")).await.unwrap_err();

    let failure = err.failure().unwrap();
    assert_eq!(failure.status.as_u16(), 500);
    assert_eq!(failure.detail, json!("upstream down"));
    assert_eq!(stored_access(&store), None);
}

#[tokio::test]
async fn given_refresh_rejected_when_unauthorized_then_original_failure_and_cleared() {
    let server = MockServer::start().await;
    mount_refresh(
        &server,
        ResponseTemplate::new(401).set_body_json(json!({"detail": "Token expired"})),
        1,
    )
    .await;
    mount_jobs_for_token(
        &server,
        "old",
        ResponseTemplate::new(401).set_body_json(json!({"detail": "Not authenticated"})),
    )
    .await;
    let store = store_with("old", Some("refresh-1"));
    let client = client_for(&server, store.clone());

    let err = client.execute(&ApiRequest::get("/jobs")).await.unwrap_err();

    assert_eq!(err.failure().unwrap().detail, json!("Not authenticated"));
    assert_eq!(stored_access(&store), None);
    assert_eq!(stored_refresh(&store), None);
}

/// **VALUE**: A 2xx refresh response without an access token counts as a
/// failed refresh.
///
/// **BUG THIS CATCHES**: Would catch an empty token being stored and sent as
/// `Bearer ` on the retry.
#[tokio::test]
async fn given_refresh_without_access_token_when_unauthorized_then_no_retry_and_cleared() {
    let server = MockServer::start().await;
    mount_refresh(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"accessToken": ""})),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path(api_path("/jobs")))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    let store = store_with("old", Some("refresh-1"));
    let client = client_for(&server, store.clone());

    let err = client.execute(&ApiRequest::get("/jobs")).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(stored_access(&store), None);
}

/// **VALUE**: A 401 from an `/auth/` endpoint neither refreshes nor clears.
///
/// **WHY THIS MATTERS**: A wrong password on the login form returns 401. That
/// must not wipe a session that is still valid, nor loop through refresh.
///
/// **BUG THIS CATCHES**: Would catch the auth-path exemption missing from the
/// failure branch.
#[tokio::test]
async fn given_auth_path_unauthorized_when_executed_then_no_refresh_and_tokens_kept() {
    let server = MockServer::start().await;
    mount_refresh(&server, ResponseTemplate::new(200), 0).await;
    Mock::given(method("POST"))
        .and(path(api_path("/auth/login")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "帳號或密碼錯誤"})))
        .expect(1)
        .mount(&server)
        .await;
    let store = store_with("access-1", Some("refresh-1"));
    let client = client_for(&server, store.clone());

    let request = ApiRequest::post("/auth/login")
        .json(&json!({"username": "hr", "password": "wrong"}))
        .unwrap();
    let err = client.execute(&request).await.unwrap_err();

    assert_eq!(err.failure().unwrap().display_detail(), "帳號或密碼錯誤");
    assert_eq!(stored_access(&store).as_deref(), Some("access-1"));
    assert_eq!(stored_refresh(&store).as_deref(), Some("refresh-1"));
}

/// **VALUE**: Concurrent 401s share a single refresh call.
///
/// **WHY THIS MATTERS**: Servers that rotate refresh tokens invalidate the old
/// one on first use. Two parallel refreshes would make the second fail and log
/// the user out.
///
/// **BUG THIS CATCHES**: Would catch the refresh lock being removed or the
/// "token already changed" check being skipped.
#[tokio::test]
async fn given_concurrent_unauthorized_calls_when_executed_then_single_refresh() {
    // GIVEN: A slow refresh endpoint that may only be called once
    let server = MockServer::start().await;
    mount_refresh(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"accessToken": "new", "refreshToken": "refresh-2"}))
            .set_delay(Duration::from_millis(200)),
        1,
    )
    .await;
    mount_jobs_for_token(&server, "old", ResponseTemplate::new(401)).await;
    mount_jobs_for_token(
        &server,
        "new",
        ResponseTemplate::new(200).set_body_json(json!([])),
    )
    .await;
    let store = store_with("old", Some("refresh-1"));
    let client = client_for(&server, store.clone());

    // WHEN: Three calls race on the expired token
    let request = ApiRequest::get("/jobs");
    let (a, b, c) = tokio::join!(
        client.execute(&request),
        client.execute(&request),
        client.execute(&request)
    );

    // THEN: All succeed on the single refreshed token
    assert!(a.is_ok() && b.is_ok() && c.is_ok());
    assert_eq!(stored_access(&store).as_deref(), Some("new"));
    assert_eq!(stored_refresh(&store).as_deref(), Some("refresh-2"));
}
