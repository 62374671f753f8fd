//! Shared primitives for the HR Desk workspace.
//!
//! This crate holds the small building blocks every other layer leans on:
//! error location tracking, HTTP status categorization and secret handling
//! for bearer credentials.
//!
//! ## Architecture
//!
//! - **common** (this crate): Cross-cutting primitives
//! - **models**: Plain data records exchanged with the HR API
//! - **client-core**: Authenticated request client and resource endpoints
//! - **hrdesk**: Application wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_token;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedToken;

#[cfg(test)]
mod tests;
