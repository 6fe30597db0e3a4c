//! Error types for the User actor.

use crate::model::UserId;
use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// Another user already holds this username.
    #[error("User already exists: {0}")]
    AlreadyExists(String),

    /// The user data provided is invalid.
    #[error("User validation error: {0}")]
    ValidationError(String),

    /// A reference stub no longer matches the stored record it points at.
    #[error("Stale reference to {id}: expected username {expected:?}, found {found:?}")]
    StaleReference {
        id: UserId,
        expected: String,
        found: String,
    },

    /// The store could not hand out a fresh id for a new user.
    #[error("User id allocation failed: {0}")]
    IdAllocation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for UserError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<UserError>() {
            Ok(user_error) => user_error,
            Err(FrameworkError::NotFound(id)) => UserError::NotFound(id),
            Err(FrameworkError::Conflict(username)) => UserError::AlreadyExists(username),
            Err(e @ (FrameworkError::IdsExhausted | FrameworkError::DuplicateId(_))) => {
                UserError::IdAllocation(e.to_string())
            }
            Err(other) => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}
