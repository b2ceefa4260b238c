//! # Item Actor
//!
//! Owns the item collection. Items carry a creation timestamp, so the store's
//! context is a [`Clock`]; production code passes [`system_clock`], tests pass
//! a [`fixed_clock`].
//!
//! ```rust
//! use contract_api::item_actor;
//! use contract_api::model::ItemCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = item_actor::new(32);
//!     tokio::spawn(actor.run(item_actor::system_clock()));
//!
//!     let item = client.create_item(ItemCreate::new("Widget", None)).await?;
//!     assert_eq!(item.id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ItemClient;
use crate::model::Item;
use chrono::{DateTime, Utc};
use resource_framework::ResourceActor;
use std::sync::Arc;

/// Source of `createdAt` timestamps.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

/// A clock frozen at `at`.
pub fn fixed_clock(at: DateTime<Utc>) -> Clock {
    Arc::new(move || at)
}

/// Creates a new Item actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<Item>, ItemClient) {
    let (actor, generic_client) = ResourceActor::new(buffer);
    (actor, ItemClient::new(generic_client))
}
