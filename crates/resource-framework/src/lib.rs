//! # Resource Framework
//!
//! Building blocks for in-memory resource collections that are owned by a single
//! Tokio task and addressed through a cloneable, type-safe client.
//!
//! ## Why an actor per collection?
//!
//! Every collection (items, users, credentials, ...) needs the same handful of
//! operations: create with a fresh identifier, read, list, partial update, delete,
//! and a way to capture and later restore its full state. Writing that once,
//! generically, keeps every resource consistent:
//!
//! - **One owner**: the [`ResourceActor`] owns the `HashMap` and processes requests
//!   one at a time, so no request ever observes a half-applied mutation.
//! - **Deterministic identifiers**: each actor carries an [`IdentitySequencer`]
//!   that only advances when a create actually succeeds.
//! - **Snapshots by value**: a [`StoreSnapshot`] is an owned deep copy of the
//!   records plus the next identifier. Restoring clones it again, so a baseline can
//!   be reused any number of times.
//!
//! ## Module Tour
//!
//! - [`entity`] - the [`ActorEntity`] contract (ids, payloads, hooks, errors).
//! - [`sequencer`] - monotonically increasing identifier source.
//! - [`actor`] - the generic [`ResourceActor`] event loop.
//! - [`client`] - [`ResourceClient`], the sending half.
//! - [`client_trait`] - [`ActorClient`], shared read/delete/snapshot helpers for
//!   domain-specific client wrappers.
//! - [`snapshot`] - [`StoreSnapshot`].
//! - [`mock`] - expectation-driven clients for unit tests.
//! - [`tracing`] - subscriber setup.
//!
//! ## Quick Example
//!
//! ```rust
//! use resource_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Tag { id: u32, label: String }
//! #[derive(Debug)] struct TagCreate { label: String }
//! #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
//!
//! #[async_trait]
//! impl ActorEntity for Tag {
//!     type Id = u32;
//!     type Create = TagCreate;
//!     type Update = String;
//!     type Action = std::convert::Infallible;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = TagError;
//!
//!     fn from_create_params(id: u32, params: TagCreate) -> Result<Self, TagError> {
//!         Ok(Self { id, label: params.label })
//!     }
//!     async fn on_update(&mut self, label: String, _: &()) -> Result<(), TagError> {
//!         self.label = label;
//!         Ok(())
//!     }
//!     async fn handle_action(&mut self, action: Self::Action, _: &()) -> Result<(), TagError> {
//!         match action {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Tag>::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let tag = client.create(TagCreate { label: "rust".into() }).await.unwrap();
//!     assert_eq!(tag.id, 1);
//!
//!     let baseline = client.snapshot().await.unwrap();
//!     client.delete(tag.id).await.unwrap();
//!     client.restore(&baseline).await.unwrap();
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//! }
//! ```

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod sequencer;
pub mod snapshot;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use sequencer::IdentitySequencer;
pub use snapshot::StoreSnapshot;
