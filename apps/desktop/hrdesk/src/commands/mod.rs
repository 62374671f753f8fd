//! Command handlers mirroring the desktop screens.
//!
//! Each handler takes `&AppState`, calls the API client and maps failures
//! into [`HrDeskError`]. An unresolved 401 also clears the signed-in user.

pub mod analyses;
pub mod interviews;
pub mod jobs;
pub mod resumes;
pub mod session;

use crate::error::HrDeskError;
use crate::state::{AppState, StateCommand};

use client_core::ApiClientError;

use log::{error, warn};

/// Convert a client error, dropping the signed-in user when the session ended.
pub(crate) async fn map_api_error(state: &AppState, error: ApiClientError) -> HrDeskError {
    let mapped = HrDeskError::from(error);

    if mapped.is_unauthenticated() {
        warn!("Session expired: {}", mapped.user_message());
        if let Err(e) = state.update(StateCommand::ClearUser).await {
            error!("Failed to clear user after session expiry: {e}");
        }
    } else {
        error!("{mapped}");
    }

    mapped
}
