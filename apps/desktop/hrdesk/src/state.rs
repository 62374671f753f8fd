use crate::error::HrDeskError;

use client_core::ApiClient;
use models::User;

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::{Mutex, RwLock, mpsc, oneshot};

const STATE_CHANNEL_CAPACITY: usize = 100;

/// Commands that mutate application state.
///
/// All state mutations go through the state actor via these commands.
#[derive(Debug, Clone)]
pub enum StateCommand {
    /// Record the user the current session belongs to
    SetUser(User),

    /// Forget the current user (logout or expired session)
    ClearUser,
}

/// A command plus the acknowledgement sent once it has been applied.
struct Envelope {
    cmd: StateCommand,
    done: oneshot::Sender<()>,
}

/// Application state shared by all commands.
///
/// Holds the API client and the signed-in user. User mutations are
/// serialized through an actor task; reads go through an `RwLock`.
#[derive(Clone)]
pub struct AppState {
    client: ApiClient,

    command_tx: Arc<Mutex<Option<mpsc::Sender<Envelope>>>>,

    user: Arc<RwLock<Option<User>>>,

    actor_init: Arc<Mutex<bool>>,
}

impl AppState {
    /// The actor is spawned lazily on first update, inside the runtime.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            command_tx: Arc::new(Mutex::new(None)),
            user: Arc::new(RwLock::new(None)),
            actor_init: Arc::new(Mutex::new(false)),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Send a state update command.
    ///
    /// Resolves once the actor has applied the command, so a read right after
    /// `update` observes it.
    pub async fn update(&self, cmd: StateCommand) -> Result<(), HrDeskError> {
        self.ensure_actor().await;

        let (done_tx, done_rx) = oneshot::channel();

        {
            let tx_guard = self.command_tx.lock().await;
            let tx = tx_guard
                .as_ref()
                .ok_or_else(|| HrDeskError::app("State actor not initialized"))?;
            tx.send(Envelope { cmd, done: done_tx })
                .await
                .map_err(|e| HrDeskError::app(format!("State actor died: {e}")))?;
        }

        done_rx
            .await
            .map_err(|e| HrDeskError::app(format!("State actor dropped update: {e}")))
    }

    pub async fn current_user(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    async fn ensure_actor(&self) {
        let mut init_guard = self.actor_init.lock().await;
        if !*init_guard {
            let (tx, rx) = mpsc::channel(STATE_CHANNEL_CAPACITY);
            let user_clone = Arc::clone(&self.user);

            // Store tx BEFORE spawning to avoid race
            let mut tx_guard = self.command_tx.lock().await;
            *tx_guard = Some(tx);
            drop(tx_guard);

            tokio::spawn(state_actor(rx, user_clone));
            *init_guard = true;
            info!("State actor spawned");
        }
    }
}

/// The state actor task.
///
/// Owns user mutations and applies them one at a time.
async fn state_actor(mut command_rx: mpsc::Receiver<Envelope>, user: Arc<RwLock<Option<User>>>) {
    info!("State actor started");

    while let Some(Envelope { cmd, done }) = command_rx.recv().await {
        match cmd {
            StateCommand::SetUser(new_user) => {
                let mut user_write = user.write().await;

                if let Some(ref existing) = *user_write
                    && existing.id != new_user.id
                {
                    warn!(
                        "Replacing signed-in user {} with {}",
                        existing.username, new_user.username
                    );
                } else {
                    info!("Signed in as {} (id {})", new_user.username, new_user.id);
                }

                *user_write = Some(new_user);
            }
            StateCommand::ClearUser => {
                let mut user_write = user.write().await;

                if let Some(ref old_user) = *user_write {
                    info!("Clearing session for {}", old_user.username);
                }

                *user_write = None;
            }
        }

        // the caller may have stopped waiting
        let _ = done.send(());
    }

    warn!("State actor stopped - this should not happen during normal operation");
}
