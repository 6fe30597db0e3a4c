use crate::clients::UserClient;
use crate::config::IdentityConfig;
use crate::user_actor;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

#[derive(Debug, Error)]
#[error("Actor task failed: {0}")]
pub struct ShutdownError(#[from] JoinError);

/// Owns the running user store and the client used to reach it.
///
/// ```ignore
/// let system = IdentitySystem::new(&IdentityConfig::default());
/// let id = system.user_client.register(dto).await?;
/// system.shutdown().await?;
/// ```
pub struct IdentitySystem {
    /// Client for interacting with the User actor
    pub user_client: UserClient,

    handle: JoinHandle<()>,
}

impl IdentitySystem {
    /// Spawns the User actor with the configured buffer, first id and username rules.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &IdentityConfig) -> Self {
        let (user_actor, user_client) =
            user_actor::with_first_id(config.store.buffer_size, config.store.first_id);
        let handle = tokio::spawn(user_actor.run(config.users.clone()));

        Self {
            user_client,
            handle,
        }
    }

    /// Drops the system's client and waits for the actor to drain and exit.
    ///
    /// Clones of [`user_client`](Self::user_client) held elsewhere keep the actor alive, so
    /// drop them first.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");
        drop(self.user_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e.into());
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
