//! # User Actor
//!
//! The store for [`User`] records: a [`ResourceActor<User>`] plus the rules it enforces.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`actions`] - [`UserAction`] and [`UserActionResult`] for role changes and projection
//! - [`rules`] - [`UserRules`], the actor's injected context
//! - [`new()`] / [`with_first_id()`] - factory functions that create the actor and client
//!
//! ## What the store guarantees
//!
//! - **Id assignment**: ids come from the actor's allocator on first persistence; a record
//!   built from a [`UserDto`](crate::model::UserDto) has none until then.
//! - **Unique usernames**: a second user with a taken username is rejected with
//!   [`UserError::AlreadyExists`]. Two registrations are never merged into one record.
//! - **Eager roles**: every record read back from the store carries its full role set.
//!
//! ## Usage
//!
//! ```rust
//! use jambox_identity::user_actor::{self, UserRules};
//! use jambox_identity::model::{Role, UserDto};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!     tokio::spawn(actor.run(UserRules::default()));
//!
//!     let id = client.register(UserDto::new("alice", "p@ss", [Role::User])).await?;
//!     let reduced = client.reduced(id).await?;
//!     assert_eq!(reduced.username, "alice");
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;
pub mod rules;

pub use actions::*;
pub use error::*;
pub use rules::*;

use crate::clients::UserClient;
use crate::model::User;
use resource_actor::{ResourceActor, SequentialIds};

/// Creates a new User actor and its client, handing out ids from 1.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    with_first_id(buffer_size, 1)
}

/// Creates a new User actor and its client, handing out ids from `first_id`.
pub fn with_first_id(buffer_size: usize, first_id: u32) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) =
        ResourceActor::with_allocator(buffer_size, SequentialIds::starting_at(first_id));
    (actor, UserClient::new(generic_client))
}
