use crate::{ActorEntity, FrameworkError, ResourceClient, StoreSnapshot};
use async_trait::async_trait;

/// Shared operations for domain-specific client wrappers.
///
/// A wrapper such as `ItemClient` only has to expose its inner
/// [`ResourceClient`] and say how framework errors map onto its own error type;
/// reading, listing, deleting, and snapshot/restore then come for free.
///
/// # Example
///
/// ```rust
/// use resource_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Tag { id: u32 }
/// #[derive(Debug)] struct TagCreate;
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct TagError(String);
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = u32;
///     type Create = TagCreate;
///     type Update = std::convert::Infallible;
///     type Action = std::convert::Infallible;
///     type ActionResult = ();
///     type Context = ();
///     type Error = TagError;
///
///     fn from_create_params(id: u32, _: TagCreate) -> Result<Self, TagError> { Ok(Self { id }) }
///     async fn on_update(&mut self, update: Self::Update, _: &()) -> Result<(), TagError> { match update {} }
///     async fn handle_action(&mut self, action: Self::Action, _: &()) -> Result<(), TagError> { match action {} }
/// }
///
/// struct TagClient { inner: ResourceClient<Tag> }
///
/// #[async_trait]
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///
///     fn inner(&self) -> &ResourceClient<Tag> { &self.inner }
///     fn map_error(e: FrameworkError) -> TagError { TagError(e.to_string()) }
/// }
///
/// async fn usage(client: TagClient) {
///     // get(), list(), delete(), snapshot() and restore() are provided
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by id; an absent id is reported through
    /// [`FrameworkError::NotFound`].
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        match self.inner().get(id.clone()).await.map_err(Self::map_error)? {
            Some(record) => Ok(record),
            None => Err(Self::map_error(FrameworkError::NotFound(id.to_string()))),
        }
    }

    /// All records in insertion order.
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

    async fn snapshot(&self) -> Result<StoreSnapshot<T>, Self::Error> {
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    async fn restore(&self, snapshot: &StoreSnapshot<T>) -> Result<(), Self::Error> {
        self.inner().restore(snapshot).await.map_err(Self::map_error)
    }
}
