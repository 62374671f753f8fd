use crate::error::request_failure::RequestFailure;
use crate::error::token_store::TokenStoreError;

use common::{ErrorLocation, HttpStatusCode};
use models::ModelError;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ApiClientError {
    /// Transport-level failure reported by the HTTP stack, passed through untranslated.
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        is_timeout: bool,
        is_connect: bool,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Path Error: {message} {location}")]
    InvalidPath {
        message: String,
        location: ErrorLocation,
    },

    #[error("Request Failure: {failure} {location}")]
    Request {
        failure: RequestFailure,
        location: ErrorLocation,
    },

    #[error("Token Store Error: {message} {location}")]
    TokenStore {
        message: String,
        location: ErrorLocation,
    },

    #[error("Model Error: {message} {location}")]
    Model {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiClientError {
    #[track_caller]
    pub fn request(failure: RequestFailure) -> Self {
        ApiClientError::Request {
            failure,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_path(message: impl Into<String>) -> Self {
        ApiClientError::InvalidPath {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The typed failure, if this error is an unresolved HTTP response.
    pub fn failure(&self) -> Option<&RequestFailure> {
        match self {
            ApiClientError::Request { failure, .. } => Some(failure),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<HttpStatusCode> {
        self.failure().map(|failure| failure.status)
    }

    /// True for a 401 response.
    ///
    /// Stored credentials have been cleared when the request targeted a
    /// resource path. A 401 from an `/auth/` path leaves them untouched.
    pub fn is_unauthorized(&self) -> bool {
        self.failure().is_some_and(RequestFailure::is_unauthorized)
    }
}

impl From<url::ParseError> for ApiClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ApiClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ApiClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ApiClientError::Http {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connect: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ApiClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ApiClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<TokenStoreError> for ApiClientError {
    #[track_caller]
    fn from(error: TokenStoreError) -> Self {
        ApiClientError::TokenStore {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ModelError> for ApiClientError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        ApiClientError::Model {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
