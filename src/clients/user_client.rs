//! # User Client
//!
//! Provides a high‑level API for the User store.
//! It wraps a `ResourceClient<User>` and exposes identity-specific operations.
use crate::model::{ReducedUserDto, Role, User, UserDto, UserId, UserUpdate};
use crate::user_actor::{UserAction, UserActionResult, UserError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument, warn};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::from(e)
    }
}

impl UserClient {
    /// Persists a new user built from the DTO and returns the id the store assigned.
    ///
    /// Fails with [`UserError::AlreadyExists`] when the username is taken and with
    /// [`UserError::ValidationError`] when it is empty or too long. When the store has no ids
    /// left it fails with [`UserError::IdAllocation`].
    #[instrument(skip(self))]
    pub async fn register(&self, dto: UserDto) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(dto).await.map_err(UserError::from)
    }

    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        self.inner
            .find_by_key(username.to_string())
            .await
            .map_err(UserError::from)
    }

    /// All stored users, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        let mut users = self.list().await?;
        users.sort_by_key(|user| user.id);
        Ok(users)
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(UserError::from)
    }

    /// Adds `role` to the user. Returns whether the role set changed.
    #[instrument(skip(self))]
    pub async fn grant_role(&self, id: UserId, role: Role) -> Result<bool, UserError> {
        match self
            .inner
            .perform_action(id, UserAction::GrantRole(role))
            .await
        {
            Ok(UserActionResult::GrantRole(changed)) => Ok(changed),
            Ok(other) => Err(unexpected(other)),
            Err(e) => Err(UserError::from(e)),
        }
    }

    /// Removes `role` from the user. Returns whether the role set changed.
    #[instrument(skip(self))]
    pub async fn revoke_role(&self, id: UserId, role: Role) -> Result<bool, UserError> {
        match self
            .inner
            .perform_action(id, UserAction::RevokeRole(role))
            .await
        {
            Ok(UserActionResult::RevokeRole(changed)) => Ok(changed),
            Ok(other) => Err(unexpected(other)),
            Err(e) => Err(UserError::from(e)),
        }
    }

    /// The identity-only projection of a stored user. The credential never leaves the actor.
    #[instrument(skip(self))]
    pub async fn reduced(&self, id: UserId) -> Result<ReducedUserDto, UserError> {
        match self.inner.perform_action(id, UserAction::Reduce).await {
            Ok(UserActionResult::Reduce(reduced)) => Ok(reduced),
            Ok(other) => Err(unexpected(other)),
            Err(e) => Err(UserError::from(e)),
        }
    }

    /// Re-attaches a reference stub to the full stored record.
    ///
    /// Returns `Ok(None)` when no user has the reference's id, and
    /// [`UserError::StaleReference`] when one does but under another username.
    #[instrument(skip(self))]
    pub async fn resolve(&self, reference: ReducedUserDto) -> Result<Option<User>, UserError> {
        let id = reference.id;
        let Some(stored) = self.get(id).await? else {
            debug!(%id, "Reference points at no user");
            return Ok(None);
        };
        if stored.username != reference.username {
            warn!(%id, expected = %reference.username, found = %stored.username, "Stale reference");
            return Err(UserError::StaleReference {
                id,
                expected: reference.username,
                found: stored.username,
            });
        }
        Ok(Some(stored))
    }
}

fn unexpected(result: UserActionResult) -> UserError {
    UserError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}
