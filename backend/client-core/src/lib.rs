pub mod api_client;
pub mod config;
pub mod error;
pub mod token_store;

pub use api_client::{
    AnalysisFilter, ApiClient, ApiRequest, HttpMethod, InterviewFilter, QueryString, ResumeFilter,
};
pub use error::api_client::ApiClientError;
pub use error::request_failure::RequestFailure;
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};

#[cfg(test)]
mod tests;

pub const APP_DIR_NAME: &str = "hrdesk";
pub const API_SERVER_HOSTNAME: &str = "localhost";
pub const API_SERVER_PORT: u16 = 8000;
pub const API_VERSION_PREFIX: &str = "/api/v1";
pub const DEFAULT_API_BASE_URL: &str = const_format::concatcp!(
    "http://",
    API_SERVER_HOSTNAME,
    ":",
    API_SERVER_PORT,
    API_VERSION_PREFIX
);

/// Environment variable overriding the API base URL.
pub const API_BASE_URL_ENV_KEY: &str = "HR_API_BASE_URL";

/// Paths under this prefix never carry the stored bearer token and never refresh.
pub const AUTH_PATH_PREFIX: &str = "/auth/";
pub const AUTH_REFRESH_PATH: &str = "/auth/refresh";
