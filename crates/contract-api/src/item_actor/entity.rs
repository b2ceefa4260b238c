//! [`ActorEntity`] implementation for [`Item`].

use super::{Clock, ItemError};
use crate::model::{Item, ItemCreate, ItemId, ItemUpdate};
use crate::validation::{self, ValidationError};
use async_trait::async_trait;
use chrono::DateTime;
use resource_framework::ActorEntity;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Item {
    type Id = ItemId;
    type Create = ItemCreate;
    type Update = ItemUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = Clock;
    type Error = ItemError;

    /// Validates the payload. `created_at` is stamped in [`Self::on_create`],
    /// where the clock is available.
    fn from_create_params(id: ItemId, params: ItemCreate) -> Result<Self, ItemError> {
        validation::item_name(&params.name)?;
        if let Some(description) = &params.description {
            validation::item_description(description)?;
        }
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            created_at: DateTime::default(),
        })
    }

    async fn on_create(&mut self, clock: &Clock) -> Result<(), ItemError> {
        self.created_at = clock();
        Ok(())
    }

    /// Applies only the fields present in the patch. `id` and `created_at`
    /// never change.
    async fn on_update(&mut self, update: ItemUpdate, _clock: &Clock) -> Result<(), ItemError> {
        match update.name {
            None => {}
            Some(None) => return Err(ValidationError::required("name").into()),
            Some(Some(name)) => {
                validation::item_name(&name)?;
                self.name = name;
            }
        }
        match update.description {
            None => {}
            Some(None) => self.description = None,
            Some(Some(description)) => {
                validation::item_description(&description)?;
                self.description = Some(description);
            }
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _clock: &Clock) -> Result<(), ItemError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item_actor::fixed_clock;

    fn sample() -> Item {
        Item::from_create_params(ItemId(1), ItemCreate::new("Sample Item", Some("desc"))).unwrap()
    }

    #[test]
    fn create_rejects_invalid_name() {
        let err = Item::from_create_params(ItemId(1), ItemCreate::new("", None)).unwrap_err();
        assert!(matches!(err, ItemError::Validation(ref v) if v.field == "name"));

        let long = "n".repeat(101);
        assert!(Item::from_create_params(ItemId(1), ItemCreate::new(long, None)).is_err());
    }

    #[tokio::test]
    async fn on_create_stamps_clock_time() {
        let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let mut item = sample();
        item.on_create(&fixed_clock(at)).await.unwrap();
        assert_eq!(item.created_at, at);
    }

    #[tokio::test]
    async fn null_description_clears_and_absent_keeps() {
        let clock = fixed_clock(DateTime::default());
        let mut item = sample();

        item.on_update(ItemUpdate::name("Renamed"), &clock).await.unwrap();
        assert_eq!(item.name, "Renamed");
        assert_eq!(item.description.as_deref(), Some("desc"));

        let clear = ItemUpdate {
            description: Some(None),
            ..ItemUpdate::default()
        };
        item.on_update(clear, &clock).await.unwrap();
        assert_eq!(item.description, None);
        assert_eq!(item.name, "Renamed");
    }

    #[tokio::test]
    async fn null_or_empty_name_is_rejected() {
        let clock = fixed_clock(DateTime::default());
        let mut item = sample();

        let null_name = ItemUpdate {
            name: Some(None),
            ..ItemUpdate::default()
        };
        assert!(item.on_update(null_name, &clock).await.is_err());
        assert!(item.on_update(ItemUpdate::name(""), &clock).await.is_err());
    }
}
