//! `/auth/*` endpoints and session bootstrap.

use super::{ApiClient, ApiRequest};
use crate::error::ApiClientError;

use common::RedactedToken;
use models::{
    AuthTokens, CredentialPair, CredentialPairBuilder, LoginRequest, OkResponse, RefreshRequest,
    RegisterRequest, User,
};

use log::{debug, info, warn};

pub const AUTH_REGISTER_PATH: &str = "/auth/register";
pub const AUTH_LOGIN_PATH: &str = "/auth/login";
pub const AUTH_ME_PATH: &str = "/auth/me";

fn into_credentials(tokens: AuthTokens) -> Result<CredentialPair, ApiClientError> {
    Ok(CredentialPairBuilder::default()
        .with_access_token(tokens.access_token)
        .with_optional_refresh_token(tokens.refresh_token)
        .build()?)
}

impl ApiClient {
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<OkResponse, ApiClientError> {
        let request =
            ApiRequest::post(AUTH_REGISTER_PATH).json(&RegisterRequest { username, password })?;
        self.execute_as(&request).await
    }

    /// Log in and persist the returned credential pair.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<CredentialPair, ApiClientError> {
        let request =
            ApiRequest::post(AUTH_LOGIN_PATH).json(&LoginRequest { username, password })?;
        let tokens: AuthTokens = self.execute_as(&request).await?;
        let credentials = into_credentials(tokens)?;

        self.token_store().set_tokens(&credentials)?;
        info!("Logged in as {username}");

        Ok(credentials)
    }

    /// The user the stored access token belongs to.
    pub async fn me(&self) -> Result<User, ApiClientError> {
        let request = ApiRequest::get(AUTH_ME_PATH).with_stored_bearer();
        self.execute_as(&request).await
    }

    /// Exchange a refresh token for a new pair without touching the store.
    pub async fn refresh(
        &self,
        refresh_token: &RedactedToken,
    ) -> Result<CredentialPair, ApiClientError> {
        let request = ApiRequest::post(crate::AUTH_REFRESH_PATH).json(&RefreshRequest {
            refresh_token: refresh_token.as_str(),
        })?;
        let tokens: AuthTokens = self.execute_as(&request).await?;
        into_credentials(tokens)
    }

    pub fn logout(&self) -> Result<(), ApiClientError> {
        self.token_store().clear()?;
        info!("Logged out, stored credentials cleared");
        Ok(())
    }

    /// Resolve the stored session to a user.
    ///
    /// Without a stored access token this returns `None` and performs no
    /// request. When the lookup fails for any reason the stored tokens are
    /// cleared and `None` is returned.
    pub async fn restore_session(&self) -> Result<Option<User>, ApiClientError> {
        if self.token_store().access_token()?.is_none() {
            debug!("No stored access token, skipping session restore");
            return Ok(None);
        }

        match self.me().await {
            Ok(user) => {
                info!("Restored session for {}", user.username);
                Ok(Some(user))
            }
            Err(e) => {
                warn!("Session restore failed, clearing stored credentials: {e}");
                self.token_store().clear()?;
                Ok(None)
            }
        }
    }
}
