//! # Framework Errors
//!
//! Errors raised by the store itself, as opposed to the errors an entity's hooks return
//! (those travel boxed inside [`FrameworkError::EntityError`]).

/// Errors that can occur within the resource actor or its client.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// Another record already owns this unique key.
    #[error("Unique key already taken: {0}")]
    Conflict(String),
    /// The id allocator has no ids left.
    #[error("Id space exhausted")]
    IdsExhausted,
    /// The id allocator handed out an id that is already stored.
    #[error("Id already in use: {0}")]
    DuplicateId(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an [`FrameworkError::EntityError`].
    ///
    /// Returns `Err(self)` unchanged for every other variant, or when the boxed error is of
    /// a different type.
    pub fn into_entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(inner) => Err(FrameworkError::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}
