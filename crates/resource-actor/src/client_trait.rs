//! # ActorClient Trait
//!
//! Common interface for entity-specific clients: default `get`, `list` and `delete` built on
//! top of the wrapped [`ResourceClient`], with errors mapped into the entity's own type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for entity-specific clients to inherit the standard read and delete operations.
///
/// # Example
///
/// ```rust
/// use resource_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Venue { id: u32 }
/// #[derive(Debug)] struct VenueCreate;
/// #[derive(Debug)] struct VenueUpdate;
/// #[derive(Debug)] enum VenueAction {}
/// #[derive(Debug)] struct VenueError(String);
///
/// impl std::fmt::Display for VenueError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
/// impl std::error::Error for VenueError {}
///
/// #[async_trait]
/// impl ActorEntity for Venue {
///     type Id = u32;
///     type Create = VenueCreate;
///     type Update = VenueUpdate;
///     type Action = VenueAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = VenueError;
///
///     fn from_create_params(id: u32, _: VenueCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: VenueUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: VenueAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct VenueClient {
///     inner: ResourceClient<Venue>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Venue> for VenueClient {
///     type Error = VenueError;
///
///     fn inner(&self) -> &ResourceClient<Venue> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         VenueError(e.to_string())
///     }
/// }
///
/// async fn usage(client: VenueClient) {
///     // get(), list() and delete() come for free
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The entity-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the entity-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every stored record.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete a record by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
