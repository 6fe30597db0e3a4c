//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a store of records and
//! serves every request against it. It processes messages one at a time, so the store and
//! its unique-key index never need a lock.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::ids::{IdAllocator, SequentialIds};
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that stores records of one entity type.
///
/// The actor is the "server" half: it owns the store, the unique-key index, the id
/// allocator and the receiving end of the channel. Each actor runs in its own Tokio task.
///
/// # Usage Pattern
///
/// 1.  **Create**: call [`ResourceActor::new`] (or [`ResourceActor::with_allocator`]) to get
///     the actor and its [`ResourceClient`].
/// 2.  **Wire & Run**: spawn `actor.run(context)`, passing the entity's `Context`.
/// 3.  **Use**: clone the client wherever requests are made.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Band { id: u32, name: String }
/// #[derive(Debug)] struct BandCreate { name: String }
/// #[derive(Debug)] struct BandUpdate;
/// #[derive(Debug)] enum BandAction {}
/// #[derive(Debug)] struct BandError;
///
/// impl std::fmt::Display for BandError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "band error") }
/// }
/// impl std::error::Error for BandError {}
///
/// #[async_trait]
/// impl ActorEntity for Band {
///     type Id = u32;
///     type Create = BandCreate;
///     type Update = BandUpdate;
///     type Action = BandAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = BandError;
///
///     fn from_create_params(id: u32, params: BandCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, name: params.name })
///     }
///     fn unique_key(&self) -> Option<String> { Some(self.name.clone()) }
///     async fn on_update(&mut self, _: BandUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: BandAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Band>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(BandCreate { name: "Low".into() }).await.unwrap();
///     let found = client.find_by_key("Low".into()).await.unwrap().unwrap();
///     assert_eq!(found.id, id);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: allocates an id (failing if the allocator is exhausted or repeats a stored
///   id), calls `from_create_params` then `on_create`, rejects the record if its unique key
///   is taken, stores it and returns the id.
/// * **Get / FindByKey / List**: return clones of stored records.
/// * **Update / Action**: run the hook on a copy of the record and commit the copy only if
///   the hook succeeded and the unique key is still free. A failed update leaves the stored
///   record untouched. Actions the entity marks [read-only](ActorEntity::is_read_only) are
///   never written back.
/// * **Delete**: calls `on_delete`, then removes the record and its index entry.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    index: HashMap<String, T::Id>,
    ids: Box<dyn IdAllocator<T::Id>>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an actor handing out sequential ids starting at 1.
    ///
    /// `buffer_size` is the channel capacity; when it is full, client calls wait for room.
    /// A capacity of 0 is raised to 1.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_allocator(buffer_size, SequentialIds::default())
    }

    /// Creates an actor that takes its ids from `ids`.
    pub fn with_allocator(
        buffer_size: usize,
        ids: impl IdAllocator<T::Id> + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            store: HashMap::new(),
            index: HashMap::new(),
            ids: Box::new(ids),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "User" instead of "jambox_identity::model::user::User")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(id) = self.ids.next_id() else {
                        warn!(entity_type, "Id space exhausted");
                        let _ = respond_to.send(Err(FrameworkError::IdsExhausted));
                        continue;
                    };
                    if self.store.contains_key(&id) {
                        warn!(entity_type, %id, "Allocator repeated an id");
                        let _ = respond_to.send(Err(FrameworkError::DuplicateId(id.to_string())));
                        continue;
                    }

                    let mut item = match T::from_create_params(id.clone(), params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    if let Some(key) = self.conflicting_key(&id, &item) {
                        warn!(entity_type, %key, "Unique key taken");
                        let _ = respond_to.send(Err(FrameworkError::Conflict(key)));
                        continue;
                    }
                    self.commit(id.clone(), item);
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(id));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::FindByKey { key, respond_to } => {
                    let item = self
                        .index
                        .get(&key)
                        .and_then(|id| self.store.get(id))
                        .cloned();
                    let found = item.is_some();
                    debug!(entity_type, %key, found, "FindByKey");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(mut candidate) = self.store.get(&id).cloned() else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = candidate.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    if let Some(key) = self.conflicting_key(&id, &candidate) {
                        warn!(entity_type, %id, %key, "Unique key taken");
                        let _ = respond_to.send(Err(FrameworkError::Conflict(key)));
                        continue;
                    }
                    self.commit(id.clone(), candidate.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(candidate));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let read_only = T::is_read_only(&action);
                    let Some(mut candidate) = self.store.get(&id).cloned() else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = match candidate.handle_action(action, &context).await {
                        Ok(result) => result,
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if read_only {
                        debug!(entity_type, %id, "Read-only action ok");
                        let _ = respond_to.send(Ok(result));
                        continue;
                    }
                    if let Some(key) = self.conflicting_key(&id, &candidate) {
                        warn!(entity_type, %id, %key, "Unique key taken");
                        let _ = respond_to.send(Err(FrameworkError::Conflict(key)));
                        continue;
                    }
                    self.commit(id.clone(), candidate);
                    info!(entity_type, %id, "Action ok");
                    let _ = respond_to.send(Ok(result));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Returns the item's unique key if a record other than `id` already owns it.
    fn conflicting_key(&self, id: &T::Id, item: &T) -> Option<String> {
        let key = item.unique_key()?;
        match self.index.get(&key) {
            Some(owner) if owner != id => Some(key),
            _ => None,
        }
    }

    /// Stores `item` under `id`, moving its index entry if the key changed.
    fn commit(&mut self, id: T::Id, item: T) {
        if let Some(old_key) = self.store.get(&id).and_then(|old| old.unique_key()) {
            self.index.remove(&old_key);
        }
        if let Some(key) = item.unique_key() {
            self.index.insert(key, id.clone());
        }
        self.store.insert(id, item);
    }

    fn remove(&mut self, id: &T::Id) {
        if let Some(key) = self.store.remove(id).and_then(|old| old.unique_key()) {
            self.index.remove(&key);
        }
    }
}
