//! The typed failure raised for any unresolved non-2xx response.

use common::HttpStatusCode;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error as ThisError;

const REQUEST_FAILED_MESSAGE_PREFIX: &str = "API request failed: ";

/// A non-success HTTP response that survived any refresh attempt.
///
/// `detail` is the `detail` field of a JSON object body when present, otherwise
/// the whole payload (raw text bodies become `Value::String`, empty bodies
/// `Value::Null`).
#[derive(Debug, Clone, PartialEq, ThisError, Serialize)]
#[error("{message}")]
pub struct RequestFailure {
    pub message: String,
    pub status: HttpStatusCode,
    pub detail: Value,
}

impl RequestFailure {
    pub fn new(status: HttpStatusCode, detail: Value) -> Self {
        Self {
            message: format!("{REQUEST_FAILED_MESSAGE_PREFIX}{status}"),
            status,
            detail,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status.is_unauthorized()
    }

    /// Text a caller can show to the user.
    ///
    /// String details are shown as-is, structured details are JSON-stringified,
    /// and a null or blank detail falls back to the failure message.
    pub fn display_detail(&self) -> String {
        match &self.detail {
            Value::Null => self.message.clone(),
            Value::String(text) if text.trim().is_empty() => self.message.clone(),
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}
