use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use crate::snapshot::StoreSnapshot;
use tokio::sync::{mpsc, oneshot};

/// ## ResourceClient
///
/// The sending half of a [`ResourceActor`](crate::ResourceActor). Every method
/// sends one [`ResourceRequest`] and waits for the actor's reply on a one-shot
/// channel. The client only holds a channel sender, so cloning it is cheap and
/// clones can be shared freely across tasks.
///
/// Once every clone is dropped the actor's loop ends.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Creates a record under the next sequencer id and returns it.
    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    /// Inserts or overwrites the record stored under `id`.
    pub async fn put(&self, id: T::Id, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Put {
            id,
            params,
            respond_to,
        })
        .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// All records in insertion order.
    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    pub async fn snapshot(&self) -> Result<StoreSnapshot<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Snapshot { respond_to })
            .await
    }

    /// Replaces the store content with a fresh copy of `snapshot`.
    pub async fn restore(&self, snapshot: &StoreSnapshot<T>) -> Result<(), FrameworkError> {
        let snapshot = snapshot.clone();
        self.request(|respond_to| ResourceRequest::Restore {
            snapshot,
            respond_to,
        })
        .await
    }
}
