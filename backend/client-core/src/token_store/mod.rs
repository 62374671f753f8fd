//! Token storage facility consumed by the request client.
//!
//! The client never reaches into ambient global state for credentials; it is
//! handed an `Arc<dyn TokenStore>` at construction. Two implementations ship:
//! - [`MemoryTokenStore`]: process-local, for tests and throwaway sessions
//! - [`FileTokenStore`]: persistent key-value file keyed by `access_token`
//!   and `refresh_token`

pub mod file;
pub mod memory;

pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;

use crate::error::TokenStoreError;

use common::RedactedToken;
use models::{CredentialPair, CredentialPairBuilder};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Get/set/clear access to the stored credential pair.
///
/// `set_tokens` always overwrites the access token and only overwrites the
/// refresh token when the pair carries one. `clear` removes both.
pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Result<Option<RedactedToken>, TokenStoreError>;

    fn refresh_token(&self) -> Result<Option<RedactedToken>, TokenStoreError>;

    fn set_tokens(&self, credentials: &CredentialPair) -> Result<(), TokenStoreError>;

    fn clear(&self) -> Result<(), TokenStoreError>;

    /// The stored pair, or `None` when unauthenticated.
    fn credentials(&self) -> Result<Option<CredentialPair>, TokenStoreError> {
        let Some(access) = self.access_token()? else {
            return Ok(None);
        };

        let pair = CredentialPairBuilder::default()
            .with_tokens(access, self.refresh_token()?)
            .build()
            .ok();

        Ok(pair)
    }

    fn is_authenticated(&self) -> Result<bool, TokenStoreError> {
        Ok(self.access_token()?.is_some())
    }
}
