use crate::error::model_error::ModelError;
use crate::{CredentialPair, ErrorLocation};

use common::RedactedToken;

use std::panic::Location;

/// Builder for creating validated [`CredentialPair`] instances.
///
/// Accepts raw strings or already-wrapped tokens. A blank refresh token is
/// treated as absent rather than rejected, matching what the auth server
/// sends when it does not rotate refresh tokens.
#[derive(Debug, Default)]
pub struct CredentialPairBuilder {
    access_token: Option<RedactedToken>,
    refresh_token: Option<RedactedToken>,
}

impl CredentialPairBuilder {
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(RedactedToken::new(token));
        self
    }

    pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(RedactedToken::new(token));
        self
    }

    pub fn with_optional_refresh_token(mut self, token: Option<impl Into<String>>) -> Self {
        self.refresh_token = token.map(RedactedToken::new);
        self
    }

    pub fn with_tokens(mut self, access: RedactedToken, refresh: Option<RedactedToken>) -> Self {
        self.access_token = Some(access);
        self.refresh_token = refresh;
        self
    }

    /// Build the CredentialPair with validation.
    #[track_caller]
    pub fn build(self) -> Result<CredentialPair, ModelError> {
        let access_token = self.access_token.ok_or_else(|| ModelError::Validation {
            message: String::from("Access token is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if access_token.is_blank() {
            return Err(ModelError::Validation {
                message: String::from("Access token cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let refresh_token = self.refresh_token.filter(|token| !token.is_blank());

        Ok(CredentialPair {
            access_token,
            refresh_token,
        })
    }
}
