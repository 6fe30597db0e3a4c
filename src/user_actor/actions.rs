//! Custom actions for the User actor.
//!
//! Operations on a stored [`User`](crate::model::User) beyond plain CRUD. They run inside
//! the actor, against the stored record, through
//! [`ActorEntity::handle_action`](resource_actor::ActorEntity::handle_action).

use crate::model::{ReducedUserDto, Role};

/// Custom actions for User entities.
#[derive(Debug, Clone)]
pub enum UserAction {
    /// Adds a role to the user's set.
    GrantRole(Role),
    /// Removes a role from the user's set.
    RevokeRole(Role),
    /// Projects the stored record to its identity-only form without copying the credential
    /// out of the actor.
    Reduce,
}

/// Results from UserActions - variants match 1:1 with UserAction
#[derive(Debug, Clone, PartialEq)]
pub enum UserActionResult {
    /// Whether the role set changed.
    GrantRole(bool),
    /// Whether the role set changed.
    RevokeRole(bool),
    Reduce(ReducedUserDto),
}
