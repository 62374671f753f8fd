pub mod api_client;
pub mod config;
pub mod request_failure;
pub mod token_store;

pub use api_client::ApiClientError;
pub use request_failure::RequestFailure;
pub use token_store::TokenStoreError;
