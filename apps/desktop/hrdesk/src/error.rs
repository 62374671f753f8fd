use client_core::ApiClientError;
use client_core::error::TokenStoreError;
use client_core::error::config::ConfigError;

use common::ErrorLocation;

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors returned by hrdesk commands.
///
/// Serializable so a front end can branch on `type` and render `data`.
/// Location tracking is kept on every variant.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum HrDeskError {
    /// Error from this app (state actor, output, setup)
    #[error("HrDesk Error: {message} {location}")]
    App {
        message: String,
        location: ErrorLocation,
    },

    /// The API answered with a non-success status
    #[error("API Error: {status} {message} {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    /// The session is gone and the user has to log in again
    #[error("Unauthenticated Error: {message} {location}")]
    Unauthenticated {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core (transport, config, token storage)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },
}

impl HrDeskError {
    #[track_caller]
    pub fn app(message: impl Into<String>) -> Self {
        HrDeskError::App {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        HrDeskError::Unauthenticated {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, HrDeskError::Unauthenticated { .. })
    }

    /// Short text for the user, without the location suffix.
    pub fn user_message(&self) -> &str {
        match self {
            HrDeskError::App { message, .. }
            | HrDeskError::Api { message, .. }
            | HrDeskError::Unauthenticated { message, .. }
            | HrDeskError::Core { message, .. } => message,
        }
    }
}

impl From<ApiClientError> for HrDeskError {
    #[track_caller]
    fn from(error: ApiClientError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match error.failure() {
            Some(failure) if failure.is_unauthorized() => HrDeskError::Unauthenticated {
                message: failure.display_detail(),
                location,
            },
            Some(failure) => HrDeskError::Api {
                status: failure.status.as_u16(),
                message: failure.display_detail(),
                location,
            },
            None => HrDeskError::Core {
                message: error.to_string(),
                location,
            },
        }
    }
}

impl HrDeskError {
    /// Map an error from an endpoint that checks submitted credentials.
    ///
    /// A 401 there means the credentials were rejected, not that a session
    /// ended, so every HTTP failure maps to [`HrDeskError::Api`].
    #[track_caller]
    pub fn from_credentials_check(error: ApiClientError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match error.failure() {
            Some(failure) => HrDeskError::Api {
                status: failure.status.as_u16(),
                message: failure.display_detail(),
                location,
            },
            None => HrDeskError::from(error),
        }
    }
}

impl From<ConfigError> for HrDeskError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        HrDeskError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<TokenStoreError> for HrDeskError {
    #[track_caller]
    fn from(error: TokenStoreError) -> Self {
        HrDeskError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
