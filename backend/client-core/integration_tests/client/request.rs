use super::helpers::{EmptyBody, NoAuthorization, api_path, client_for, store_with};

use client_core::{ApiClient, ApiClientError, ApiRequest, MemoryTokenStore};

use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: A configured base URL with a trailing slash still yields a single
/// slash before the resource path.
///
/// **WHY THIS MATTERS**: Operators copy base URLs from browsers, which append
/// `/`. A double slash routes to a 404 on the API server.
///
/// **BUG THIS CATCHES**: Would catch the base URL being used unnormalized.
#[tokio::test]
async fn given_base_url_with_trailing_slash_when_executed_then_single_slash_join() {
    // GIVEN: A base URL override ending in "/"
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let client = ApiClient::new(
        &format!("{}/api/", server.uri()),
        Arc::new(MemoryTokenStore::new()),
    )
    .unwrap();

    // WHEN: Executing a request for /jobs
    let payload = client.execute(&ApiRequest::get("/jobs")).await.unwrap();

    // THEN: The request landed on /api/jobs
    assert_eq!(payload, json!([]));
}

/// **VALUE**: `jobs` and `/jobs` hit the same endpoint.
///
/// **BUG THIS CATCHES**: Would catch a path without a leading slash being glued
/// onto the base (`/api/v1jobs`).
#[tokio::test]
async fn given_path_with_and_without_leading_slash_when_executed_then_same_target() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/jobs")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;
    let client = client_for(&server, Arc::new(MemoryTokenStore::new()));

    client.execute(&ApiRequest::get("jobs")).await.unwrap();
    client.execute(&ApiRequest::get("/jobs")).await.unwrap();
}

/// **VALUE**: A body-less GET sends no payload at all, with the JSON content type
/// and the stored bearer token.
///
/// **WHY THIS MATTERS**: Some servers reject GET requests with a body, and a
/// literal `null` body would be one.
///
/// **BUG THIS CATCHES**: Would catch `Option<Value>` being serialized as `null`
/// or the bearer header going missing on ordinary resource calls.
#[tokio::test]
async fn given_get_without_body_when_executed_then_no_payload_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/jobs")))
        .and(header("content-type", "application/json"))
        .and(header("authorization", "Bearer access-1"))
        .and(EmptyBody)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server, store_with("access-1", None));

    client.execute(&ApiRequest::get("/jobs")).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert!(received[0].body.is_empty());
}

/// **VALUE**: `/auth/` endpoints never carry the stored bearer token.
///
/// **WHY THIS MATTERS**: Login with a stale token in storage must not be
/// rejected because of that token.
///
/// **BUG THIS CATCHES**: Would catch the auth-path exemption being dropped.
#[tokio::test]
async fn given_stored_token_when_auth_path_called_then_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/auth/login")))
        .and(NoAuthorization)
        .and(body_json(json!({"username": "hr", "password": "secret"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"accessToken": "fresh", "refreshToken": "r2"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server, store_with("stale", Some("r1")));

    let request = ApiRequest::post("/auth/login")
        .json(&json!({"username": "hr", "password": "secret"}))
        .unwrap();
    client.execute(&request).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert!(
        received
            .iter()
            .all(|r| !r.headers.contains_key("authorization"))
    );
}

#[tokio::test]
async fn given_json_response_when_executed_then_resolves_to_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/jobs/1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "title": "x"})))
        .mount(&server)
        .await;
    let client = client_for(&server, store_with("access-1", None));

    let payload = client.execute(&ApiRequest::get("/jobs/1")).await.unwrap();

    assert_eq!(payload, json!({"id": 1, "title": "x"}));
}

/// **VALUE**: A 200 with a non-JSON body resolves to the raw text.
///
/// **BUG THIS CATCHES**: Would catch JSON parse failures on success responses
/// surfacing as errors.
#[tokio::test]
async fn given_plain_text_success_when_executed_then_resolves_to_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/health")))
        .respond_with(ResponseTemplate::new(200).set_body_string("plain text"))
        .mount(&server)
        .await;
    let client = client_for(&server, Arc::new(MemoryTokenStore::new()));

    let payload = client.execute(&ApiRequest::get("/health")).await.unwrap();

    assert_eq!(payload, Value::String("plain text".to_string()));
}

#[tokio::test]
async fn given_empty_success_body_when_executed_then_resolves_to_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(api_path("/jobs/4")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    let client = client_for(&server, store_with("access-1", None));

    let payload = client
        .execute(&ApiRequest::delete("/jobs/4"))
        .await
        .unwrap();

    assert_eq!(payload, Value::Null);
}

/// **VALUE**: The failure detail is the `detail` field when present, otherwise
/// the whole payload.
///
/// **WHY THIS MATTERS**: Screens show `detail` directly. The API uses `detail`
/// for its own errors, but proxies and crashes produce other shapes.
///
/// **BUG THIS CATCHES**: Would catch detail extraction that drops non-`detail`
/// payloads or wraps `detail` strings in their parent object.
#[tokio::test]
async fn given_error_responses_when_executed_then_detail_extracted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/jobs")))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"detail": "invalid field"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/jobs")))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"msg": "boom"})))
        .mount(&server)
        .await;
    let store = store_with("access-1", Some("refresh-1"));
    let client = client_for(&server, store.clone());

    let invalid = client
        .execute(&ApiRequest::post("/jobs").with_body(json!({})))
        .await
        .unwrap_err();
    let crashed = client.execute(&ApiRequest::get("/jobs")).await.unwrap_err();

    let invalid = invalid.failure().unwrap();
    assert_eq!(invalid.status.as_u16(), 422);
    assert_eq!(invalid.detail, json!("invalid field"));
    assert_eq!(invalid.message, "API request failed: 422");

    let crashed = crashed.failure().unwrap();
    assert_eq!(crashed.status.as_u16(), 500);
    assert_eq!(crashed.detail, json!({"msg": "boom"}));

    // non-401 failures leave credentials alone
    assert_eq!(
        super::helpers::stored_access(&store).as_deref(),
        Some("access-1")
    );
}

/// **VALUE**: Repeating a successful GET yields two independent results.
///
/// **BUG THIS CATCHES**: Would catch per-call state (retry budget, unauthorized
/// flag) leaking into the shared client.
#[tokio::test]
async fn given_same_get_twice_when_executed_then_both_resolve_independently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/jobs/1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(2)
        .mount(&server)
        .await;
    let client = client_for(&server, store_with("access-1", None));
    let request = ApiRequest::get("/jobs/1");

    let first = client.execute(&request).await.unwrap();
    let second = client.execute(&request).await.unwrap();

    assert_eq!(first, json!({"id": 1}));
    assert_eq!(first, second);
}

/// **VALUE**: An unreachable server surfaces as a transport error, untouched.
///
/// **BUG THIS CATCHES**: Would catch connection failures being retried or
/// disguised as a typed HTTP failure.
#[tokio::test]
async fn given_unreachable_server_when_executed_then_http_error() {
    // GIVEN: A port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let client = ApiClient::new(
        &format!("http://127.0.0.1:{port}/api/v1"),
        Arc::new(MemoryTokenStore::new()),
    )
    .unwrap();

    let result = client.execute(&ApiRequest::get("/jobs")).await;

    assert!(matches!(result, Err(ApiClientError::Http { .. })));
}

#[tokio::test]
async fn given_blank_path_when_executed_then_rejected_without_request() {
    let server = MockServer::start().await;
    let client = client_for(&server, Arc::new(MemoryTokenStore::new()));

    let result = client.execute(&ApiRequest::get("  ")).await;

    assert!(matches!(result, Err(ApiClientError::InvalidPath { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}
