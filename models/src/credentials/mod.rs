//! Access + optional refresh credential used for bearer authentication.

pub mod builder;

use common::RedactedToken;

/// A validated credential pair.
///
/// Either the user is unauthenticated (no pair at all) or the pair holds a
/// non-blank access token. The refresh token may be absent even when the
/// access token is present.
///
/// Construct through [`builder::CredentialPairBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPair {
    access_token: RedactedToken,
    refresh_token: Option<RedactedToken>,
}

impl CredentialPair {
    pub fn access_token(&self) -> &RedactedToken {
        &self.access_token
    }

    pub fn refresh_token(&self) -> Option<&RedactedToken> {
        self.refresh_token.as_ref()
    }

    pub fn has_refresh_token(&self) -> bool {
        self.refresh_token.is_some()
    }
}
