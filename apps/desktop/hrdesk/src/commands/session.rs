use super::map_api_error;
use crate::error::HrDeskError;
use crate::state::{AppState, StateCommand};

use models::{OkResponse, User};

use log::{debug, info, warn};

/// Log in, persist the credentials and resolve the signed-in user.
pub async fn login(state: &AppState, username: &str, password: &str) -> Result<User, HrDeskError> {
    debug!("Logging in as {username}");

    let client = state.client();
    if let Err(e) = client.login(username, password).await {
        let mapped = HrDeskError::from_credentials_check(e);
        warn!("Login failed for {username}: {}", mapped.user_message());
        return Err(mapped);
    }

    let user = match client.me().await {
        Ok(user) => user,
        Err(e) => return Err(map_api_error(state, e).await),
    };

    state.update(StateCommand::SetUser(user.clone())).await?;
    info!("Login complete for {}", user.username);

    Ok(user)
}

pub async fn register(
    state: &AppState,
    username: &str,
    password: &str,
) -> Result<OkResponse, HrDeskError> {
    debug!("Registering {username}");

    match state.client().register(username, password).await {
        Ok(ack) => {
            info!("Registered {username}");
            Ok(ack)
        }
        Err(e) => {
            let mapped = HrDeskError::from_credentials_check(e);
            warn!(
                "Registration failed for {username}: {}",
                mapped.user_message()
            );
            Err(mapped)
        }
    }
}

/// Clear stored credentials and the signed-in user.
pub async fn logout(state: &AppState) -> Result<(), HrDeskError> {
    state.client().logout()?;
    state.update(StateCommand::ClearUser).await?;
    Ok(())
}

/// The signed-in user, restoring a stored session when none is loaded yet.
///
/// `Ok(None)` means the caller should show the login screen.
pub async fn current_user(state: &AppState) -> Result<Option<User>, HrDeskError> {
    if let Some(user) = state.current_user().await {
        return Ok(Some(user));
    }

    let restored = state.client().restore_session().await?;

    match restored {
        Some(user) => {
            state.update(StateCommand::SetUser(user.clone())).await?;
            Ok(Some(user))
        }
        None => {
            debug!("No session to restore");
            Ok(None)
        }
    }
}
