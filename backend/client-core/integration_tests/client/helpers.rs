//! Shared fixtures for driving `ApiClient` against a wiremock server.

use client_core::{ApiClient, MemoryTokenStore, TokenStore};
use models::{CredentialPair, CredentialPairBuilder};

use std::sync::Arc;

use wiremock::{Match, MockServer, Request};

pub const API_PREFIX: &str = "/api/v1";

pub fn credentials(access: &str, refresh: Option<&str>) -> CredentialPair {
    CredentialPairBuilder::default()
        .with_access_token(access)
        .with_optional_refresh_token(refresh)
        .build()
        .expect("valid test credentials")
}

pub fn store_with(access: &str, refresh: Option<&str>) -> Arc<MemoryTokenStore> {
    Arc::new(MemoryTokenStore::with_credentials(&credentials(
        access, refresh,
    )))
}

/// Client pointed at `{server}/api/v1`, sharing `store` with the caller.
pub fn client_for(server: &MockServer, store: Arc<MemoryTokenStore>) -> ApiClient {
    ApiClient::new(&format!("{}{}", server.uri(), API_PREFIX), store)
        .expect("mock server URI is a valid base URL")
}

pub fn api_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

pub fn stored_access(store: &MemoryTokenStore) -> Option<String> {
    store
        .access_token()
        .expect("memory store readable")
        .map(|token| token.as_str().to_string())
}

pub fn stored_refresh(store: &MemoryTokenStore) -> Option<String> {
    store
        .refresh_token()
        .expect("memory store readable")
        .map(|token| token.as_str().to_string())
}

/// Matches requests that carry no `Authorization` header.
pub struct NoAuthorization;

impl Match for NoAuthorization {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

/// Matches requests with an empty body.
pub struct EmptyBody;

impl Match for EmptyBody {
    fn matches(&self, request: &Request) -> bool {
        request.body.is_empty()
    }
}
