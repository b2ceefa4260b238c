//! # Item Client
//!
//! Wraps a `ResourceClient<Item>` and maps framework errors onto [`ItemError`].

use crate::item_actor::ItemError;
use crate::model::{Item, ItemCreate, ItemId, ItemUpdate};
use async_trait::async_trait;
use resource_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Item actor.
#[derive(Clone)]
pub struct ItemClient {
    inner: ResourceClient<Item>,
}

impl ItemClient {
    pub fn new(inner: ResourceClient<Item>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_item(&self, params: ItemCreate) -> Result<Item, ItemError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_item(&self, id: ItemId, update: ItemUpdate) -> Result<Item, ItemError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Item> for ItemClient {
    type Error = ItemError;

    fn inner(&self) -> &ResourceClient<Item> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> ItemError {
        match e {
            FrameworkError::NotFound(id) => ItemError::NotFound(id),
            other => other
                .into_entity_error::<ItemError>()
                .unwrap_or_else(|e| ItemError::Store(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use chrono::DateTime;
    use resource_framework::mock::MockClient;

    #[tokio::test]
    async fn entity_errors_keep_their_kind() {
        let mut mock = MockClient::<Item>::new();
        mock.expect_create().return_err(FrameworkError::entity(ItemError::Validation(
            ValidationError::new("name", "must not be empty"),
        )));
        mock.expect_get(ItemId(9)).return_ok(None);
        mock.expect_update(ItemId(9))
            .return_err(FrameworkError::NotFound("9".into()));

        let client = ItemClient::new(mock.client());

        let err = client.create_item(ItemCreate::new("", None)).await.unwrap_err();
        assert!(matches!(err, ItemError::Validation(_)));

        assert_eq!(
            client.get(ItemId(9)).await.unwrap_err(),
            ItemError::NotFound("9".into())
        );
        assert_eq!(
            client
                .update_item(ItemId(9), ItemUpdate::name("x"))
                .await
                .unwrap_err(),
            ItemError::NotFound("9".into())
        );
        mock.verify();
    }

    #[tokio::test]
    async fn closed_store_is_a_store_error() {
        let mut mock = MockClient::<Item>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);
        mock.expect_create().return_ok(Item {
            id: ItemId(3),
            name: "Widget".into(),
            description: None,
            created_at: DateTime::default(),
        });

        let client = ItemClient::new(mock.client());
        assert!(matches!(client.list().await, Err(ItemError::Store(_))));
        let item = client.create_item(ItemCreate::new("Widget", None)).await.unwrap();
        assert_eq!(item.id, ItemId(3));
    }
}
