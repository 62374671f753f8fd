use super::TokenStore;
use crate::error::TokenStoreError;

use common::{ErrorLocation, RedactedToken};
use models::CredentialPair;

use std::panic::Location;
use std::sync::RwLock;

#[derive(Debug, Default)]
struct StoredTokens {
    access: Option<RedactedToken>,
    refresh: Option<RedactedToken>,
}

/// In-process token store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<StoredTokens>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a credential pair.
    pub fn with_credentials(credentials: &CredentialPair) -> Self {
        Self {
            tokens: RwLock::new(StoredTokens {
                access: Some(credentials.access_token().clone()),
                refresh: credentials.refresh_token().cloned(),
            }),
        }
    }
}

#[track_caller]
fn poisoned<E: std::fmt::Display>(error: E) -> TokenStoreError {
    TokenStoreError::Lock {
        location: ErrorLocation::from(Location::caller()),
        reason: error.to_string(),
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Result<Option<RedactedToken>, TokenStoreError> {
        let tokens = self.tokens.read().map_err(poisoned)?;
        Ok(tokens.access.clone())
    }

    fn refresh_token(&self) -> Result<Option<RedactedToken>, TokenStoreError> {
        let tokens = self.tokens.read().map_err(poisoned)?;
        Ok(tokens.refresh.clone())
    }

    fn set_tokens(&self, credentials: &CredentialPair) -> Result<(), TokenStoreError> {
        let mut tokens = self.tokens.write().map_err(poisoned)?;
        tokens.access = Some(credentials.access_token().clone());
        if let Some(refresh) = credentials.refresh_token() {
            tokens.refresh = Some(refresh.clone());
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        let mut tokens = self.tokens.write().map_err(poisoned)?;
        tokens.access = None;
        tokens.refresh = None;
        Ok(())
    }
}
