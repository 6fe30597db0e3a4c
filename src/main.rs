use jambox_identity::config::IdentityConfig;
use jambox_identity::lifecycle::{setup_tracing, IdentitySystem};
use jambox_identity::model::{Role, UserDto, UserUpdate};
use jambox_identity::user_actor::UserError;
use std::error::Error;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = IdentityConfig::from_env()?;
    setup_tracing(&config.logging.level);

    info!(?config, "Starting identity store");
    let system = IdentitySystem::new(&config);
    let users = &system.user_client;

    let span = tracing::info_span!("registration");
    let alice = async {
        info!("Registering users");
        let alice = users
            .register(UserDto::new("alice", "s3cret", [Role::User]))
            .await?;
        users
            .register(UserDto::new("bob", "hunter2", [Role::User]))
            .await?;
        Ok::<_, UserError>(alice)
    }
    .instrument(span)
    .await?;

    match users
        .register(UserDto::new("alice", "other", [Role::Admin]))
        .await
    {
        Err(UserError::AlreadyExists(username)) => {
            info!(%username, "Duplicate registration rejected")
        }
        other => warn!(?other, "Duplicate registration was not rejected"),
    }

    users.grant_role(alice, Role::Admin).await?;
    users
        .update_user(
            alice,
            UserUpdate {
                band_name: Some("Alice & the Absurd".to_string()),
                ..UserUpdate::default()
            },
        )
        .await?;

    if let Some(found) = users.find_by_username("alice").await? {
        info!(user = ?found, "Found by username");
    }

    let reduced = users.reduced(alice).await?;
    info!(json = %serde_json::to_string(&reduced)?, "Reduced projection");

    let resolved = users.resolve(reduced).await?;
    info!(user = ?resolved, "Resolved reference");

    let all = users.list_users().await?;
    info!(count = all.len(), "Registered users");

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
