//! # Resource Actor
//!
//! An in-process record store built on the **Actor Model**. One [`ResourceActor`] owns the
//! records of one entity type inside its own Tokio task; any number of cloned
//! [`ResourceClient`]s talk to it over a channel. Because the actor handles one request at a
//! time, its store, its unique-key index and its id allocator need no locks.
//!
//! ## What the store is responsible for
//!
//! - **Id assignment**: every create draws a fresh id from an [`IdAllocator`]
//!   ([`SequentialIds`] by default). Ids are never reused.
//! - **Uniqueness**: records that report an [`ActorEntity::unique_key`] are indexed by it.
//!   Creating or updating a record onto a key that another record owns fails with
//!   [`FrameworkError::Conflict`]; nothing is merged or overwritten.
//! - **Retrieval**: by id, by unique key, or all records.
//! - **Lifecycle hooks**: the entity validates itself in `on_create` / `on_update` and may
//!   veto deletion in `on_delete`.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the record type and its business rules.
//! 2. **Runtime** ([`ResourceActor`]): message loop, store, index, id allocation.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed async requests.
//!
//! ## Context Injection
//!
//! Dependencies reach the hooks through the entity's `Context` type, passed to
//! [`ResourceActor::run`] rather than to the constructor, so an actor can be created before
//! the things it depends on exist.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted expectations, for
//! testing code around a client without running a store.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod ids;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use ids::{IdAllocator, SequentialIds};
pub use message::{ResourceRequest, Response};
