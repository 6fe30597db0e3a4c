//! # Generic Messages
//!
//! Request types sent from a [`ResourceClient`](crate::ResourceClient) to its
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor to request an operation on its store.
///
/// The variants cover the lifecycle of a stored record:
///
/// - **Create**: allocates an id and stores a record built from [`ActorEntity::Create`].
/// - **Get**: fetches a record by id.
/// - **FindByKey**: fetches a record by its [`ActorEntity::unique_key`].
/// - **List**: returns every stored record.
/// - **Update**: applies an [`ActorEntity::Update`] to a record.
/// - **Delete**: removes a record.
/// - **Action**: runs a custom [`ActorEntity::Action`] on a record.
///
/// Payload types come from the entity's associated types, so a payload meant for one
/// entity cannot be sent to another entity's actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    FindByKey {
        key: String,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
