//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a stored record implements to be kept by a
//! [`ResourceActor`](crate::ResourceActor). It names the id type, the create and update
//! payloads, custom actions, the injected context and the error type, and it provides the
//! lifecycle hooks the actor calls around each operation.
//!
//! # Provided Methods
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::unique_key`]
//! - [`ActorEntity::is_read_only`]
//!
//! The defaults do nothing (`Ok(())` / `None` / `false`), so an entity only overrides what it
//! needs.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored record must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// The hooks are `#[async_trait]` so they may await other actors. The `Context` type is
/// handed to every hook; it is supplied to [`run()`](crate::ResourceActor::run) rather than
/// at construction, so dependencies can be wired after all actors exist.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The identifier the store keys records by.
    /// `From<u32>` lets the default [`SequentialIds`](crate::SequentialIds) allocator produce it.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32> + 'static;

    /// Payload used to create a new record.
    type Create: Send + Sync + Debug;

    /// Payload used to modify an existing record.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook. Use `()` if none are needed.
    type Context: Send + Sync;

    /// One error enum per entity, shared by every hook.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the record from the freshly allocated id and the create payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Key that must be unique across all records held by one actor.
    ///
    /// The actor keeps an index of these keys: a create or update that would produce a
    /// key already owned by another record fails with
    /// [`FrameworkError::Conflict`](crate::FrameworkError::Conflict), and
    /// [`ResourceClient::find_by_key`](crate::ResourceClient::find_by_key) looks records up
    /// through it. `None` opts the record out of the index.
    fn unique_key(&self) -> Option<String> {
        None
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after `from_create_params`, before the record is stored.
    /// Returning an error aborts the create.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update. The actor calls this on a copy and only commits it when the hook
    /// succeeds and the unique key is still free.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Whether `action` only reads the record. The actor answers read-only actions from a
    /// copy and never writes it back.
    fn is_read_only(_action: &Self::Action) -> bool {
        false
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
