//! Domain records for HR Desk.
//!
//! This crate contains the plain data structures exchanged with the HR API.
//! Records carry no behavior beyond (de)serialization and display labels;
//! the one exception is [`CredentialPair`], which enforces its invariant at
//! construction time.

pub mod analysis;
pub mod auth;
pub mod credentials;
pub mod error;
pub mod interview;
pub mod job;
pub mod resume;

pub use analysis::{AiAnalysis, AnalysisCreate};
pub use auth::{AuthTokens, LoginRequest, OkResponse, RefreshRequest, RegisterRequest, User};
pub use credentials::CredentialPair;
pub use credentials::builder::CredentialPairBuilder;
pub use error::model_error::ModelError;
pub use interview::{Interview, InterviewCreate, InterviewStatus, InterviewUpdate};
pub use job::{Job, JobCreate, JobStatus, JobUpdate};
pub use resume::{Resume, ResumeCreate, ResumeStatus};

pub use common::ErrorLocation;

#[cfg(test)]
mod tests;
