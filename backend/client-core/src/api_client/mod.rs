//! Authenticated request client for the HR API.
//!
//! Every resource call funnels through [`ApiClient::execute`], which:
//! - joins the request path onto the configured base URL
//! - attaches the stored bearer token (except for `/auth/` endpoints)
//! - on a 401, refreshes the credentials once and retries once
//! - turns any remaining non-2xx response into a [`RequestFailure`]
//!
//! The call is modelled as a small state machine ([`RequestPhase`]) so the
//! single-retry rule is an explicit budget, not an accident of nesting.

pub mod analyses;
pub mod auth;
pub mod interviews;
pub mod jobs;
pub mod payload;
pub mod query;
pub mod request;
pub mod resumes;

pub use analyses::AnalysisFilter;
pub use interviews::InterviewFilter;
pub use query::QueryString;
pub use request::{ApiRequest, HttpMethod};
pub use resumes::ResumeFilter;

use crate::error::{ApiClientError, RequestFailure};
use crate::token_store::TokenStore;
use crate::{AUTH_PATH_PREFIX, AUTH_REFRESH_PATH};

use payload::{extract_detail, parse_safely};

use common::{HttpStatusCode, RedactedToken};
use models::{AuthTokens, CredentialPairBuilder, RefreshRequest};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, trace, warn};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Mutex;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const JSON_CONTENT_TYPE: &str = "application/json";

/// A response whose body has been read and parsed.
#[derive(Debug)]
struct Reply {
    status: HttpStatusCode,
    payload: Value,
}

#[derive(Debug)]
enum RequestPhase {
    Sending,
    AwaitingRefresh {
        rejected_token: Option<RedactedToken>,
        rejection: Reply,
    },
    Retrying,
    Done(Value),
    Failed(Reply),
}

/// Refresh-and-retry allowance for one logical call.
#[derive(Debug)]
struct RetryBudget {
    remaining: u8,
}

impl RetryBudget {
    fn single() -> Self {
        Self { remaining: 1 }
    }

    fn try_consume(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Strip surrounding whitespace and trailing slashes from a base URL.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Ensure the path starts with exactly one slash.
#[track_caller]
pub fn normalize_path(path: &str) -> Result<String, ApiClientError> {
    let trimmed = path.trim().trim_start_matches('/');
    if trimmed.is_empty() {
        return Err(ApiClientError::invalid_path(format!(
            "request path must not be empty (got {path:?})"
        )));
    }
    Ok(format!("/{trimmed}"))
}

/// Whether a normalized path belongs to the authentication endpoints.
pub fn is_auth_path(normalized_path: &str) -> bool {
    normalized_path.starts_with(AUTH_PATH_PREFIX)
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    store: Arc<dyn TokenStore>,
    refresh_lock: Arc<Mutex<()>>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, store: Arc<dyn TokenStore>) -> Result<Self, ApiClientError> {
        Self::with_timeout(base_url, store, DEFAULT_TIMEOUT_DURATION)
    }

    pub fn with_timeout(
        base_url: &str,
        store: Arc<dyn TokenStore>,
        timeout: Duration,
    ) -> Result<Self, ApiClientError> {
        let base_url = normalize_base_url(base_url);
        Url::parse(&base_url)?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            client,
            store,
            refresh_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Full URL a request for `path` is sent to.
    pub fn target_url(&self, path: &str) -> Result<String, ApiClientError> {
        Ok(format!("{}{}", self.base_url, normalize_path(path)?))
    }

    /// Execute a request and deserialize the success payload.
    pub async fn execute_as<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<T, ApiClientError> {
        let payload = self.execute(request).await?;
        Ok(serde_json::from_value(payload)?)
    }

    /// Execute a request and return the parsed success payload.
    ///
    /// # Errors
    ///
    /// - [`ApiClientError::Request`] for a non-2xx response not resolved by refresh
    /// - [`ApiClientError::Http`] for transport failures (never retried)
    /// - [`ApiClientError::InvalidPath`] for an empty path
    /// - [`ApiClientError::TokenStore`] if the credential store fails
    pub async fn execute(&self, request: &ApiRequest) -> Result<Value, ApiClientError> {
        let path = normalize_path(request.path())?;
        let url = format!("{}{}", self.base_url, path);
        let auth_exempt = is_auth_path(&path);

        let mut retry_budget = RetryBudget::single();
        let mut unauthorized = false;
        let mut phase = RequestPhase::Sending;

        loop {
            phase = match phase {
                RequestPhase::Sending | RequestPhase::Retrying => {
                    let bearer = if auth_exempt && !request.forces_bearer() {
                        None
                    } else {
                        self.store.access_token()?
                    };

                    let reply = self
                        .send(request.method(), &url, request.body(), bearer.as_ref())
                        .await?;

                    if reply.status.is_success() {
                        RequestPhase::Done(reply.payload)
                    } else if reply.status.is_unauthorized() && !auth_exempt {
                        unauthorized = true;
                        if retry_budget.try_consume() {
                            RequestPhase::AwaitingRefresh {
                                rejected_token: bearer,
                                rejection: reply,
                            }
                        } else {
                            debug!("{} {} rejected again after refresh", request.method(), path);
                            RequestPhase::Failed(reply)
                        }
                    } else {
                        RequestPhase::Failed(reply)
                    }
                }
                RequestPhase::AwaitingRefresh {
                    rejected_token,
                    rejection,
                } => {
                    if self.refresh_credentials(rejected_token.as_ref()).await? {
                        debug!(
                            "Retrying {} {} with refreshed credentials",
                            request.method(),
                            path
                        );
                        RequestPhase::Retrying
                    } else {
                        RequestPhase::Failed(rejection)
                    }
                }
                RequestPhase::Done(payload) => return Ok(payload),
                RequestPhase::Failed(reply) => {
                    if unauthorized {
                        warn!(
                            "Unresolved 401 for {} {}, clearing stored credentials",
                            request.method(),
                            path
                        );
                        self.store.clear()?;
                    }

                    let failure = RequestFailure::new(reply.status, extract_detail(&reply.payload));
                    debug!("{} {} failed: {}", request.method(), path, failure);
                    return Err(ApiClientError::request(failure));
                }
            };
        }
    }

    /// Exchange the stored refresh token for a new credential pair.
    ///
    /// Refreshes are serialized. A caller that finds the stored access token
    /// already differs from the one its request was rejected with reuses it
    /// instead of refreshing again.
    ///
    /// Returns `Ok(false)` when no refresh is possible or the server refuses it.
    async fn refresh_credentials(
        &self,
        rejected_token: Option<&RedactedToken>,
    ) -> Result<bool, ApiClientError> {
        let _refresh_guard = self.refresh_lock.lock().await;

        let current = self.store.access_token()?;
        if current.is_some() && current.as_ref() != rejected_token {
            debug!("Credentials already refreshed by a concurrent request");
            return Ok(true);
        }

        let Some(refresh_token) = self.store.refresh_token()? else {
            debug!("No refresh token stored, 401 cannot be recovered");
            return Ok(false);
        };

        let url = format!("{}{}", self.base_url, AUTH_REFRESH_PATH);
        let body = serde_json::to_value(RefreshRequest {
            refresh_token: refresh_token.as_str(),
        })?;

        info!("Access token rejected, requesting refresh");
        let reply = self.send(HttpMethod::Post, &url, Some(&body), None).await?;

        if !reply.status.is_success() {
            warn!("Token refresh failed: HTTP {}", reply.status);
            return Ok(false);
        }

        let Ok(tokens) = serde_json::from_value::<AuthTokens>(reply.payload) else {
            warn!("Token refresh response did not contain an access token");
            return Ok(false);
        };

        let credentials = match CredentialPairBuilder::default()
            .with_access_token(tokens.access_token)
            .with_optional_refresh_token(tokens.refresh_token)
            .build()
        {
            Ok(credentials) => credentials,
            Err(e) => {
                warn!("Token refresh returned unusable credentials: {e}");
                return Ok(false);
            }
        };

        self.store.set_tokens(&credentials)?;
        info!(
            "Credentials refreshed (refresh token rotated: {})",
            credentials.has_refresh_token()
        );
        Ok(true)
    }

    async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&Value>,
        bearer: Option<&RedactedToken>,
    ) -> Result<Reply, ApiClientError> {
        trace!(
            "{method} {url} (bearer: {}, body: {})",
            bearer.is_some(),
            body.is_some()
        );

        let mut builder = self
            .client
            .request(method.into(), url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);

        if let Some(token) = bearer {
            builder = builder.bearer_auth(token.as_str());
        }

        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = HttpStatusCode(response.status().as_u16());
        let text = response.text().await?;

        debug!("{method} {url} -> {status}");

        Ok(Reply {
            status,
            payload: parse_safely(&text),
        })
    }
}
