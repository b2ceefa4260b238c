//! # Generic Messages
//!
//! Requests sent from a [`ResourceClient`](crate::ResourceClient) to its
//! [`ResourceActor`](crate::ResourceActor), each carrying a one-shot reply channel.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::snapshot::StoreSnapshot;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// One request against a store.
///
/// - **Create** / **Put**: insert with a sequencer-issued id, or under a caller-supplied
///   id (overwriting any existing record with that id).
/// - **Get** / **List**: read one record or all records in insertion order.
/// - **Update**: partial update of an existing record.
/// - **Delete**: remove an existing record.
/// - **Action**: record-specific operation ([`ActorEntity::Action`]).
/// - **Snapshot** / **Restore**: capture or replace the entire store content,
///   including the sequencer position.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Put {
        id: T::Id,
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
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
    Snapshot {
        respond_to: Response<StoreSnapshot<T>>,
    },
    Restore {
        snapshot: StoreSnapshot<T>,
        respond_to: Response<()>,
    },
}
