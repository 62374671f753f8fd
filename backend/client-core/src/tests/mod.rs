mod error;
mod payload;
mod query;
mod token_store;
