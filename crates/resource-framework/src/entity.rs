//! # ActorEntity Trait
//!
//! The contract every record type implements to be stored by a [`ResourceActor`].
//! It fixes the identifier type, the creation and update payloads, an optional
//! custom action, the injected context, and the error type, and it exposes the
//! lifecycle hooks the actor calls while processing requests.
//!
//! # Hook order on create
//! 1. [`ActorEntity::from_create_params`] builds (and validates) the record.
//! 2. [`ActorEntity::check_conflict`] runs against every live record.
//! 3. [`ActorEntity::on_create`] runs with the injected context.
//!
//! Only when all three succeed is the record inserted and the identifier consumed.
//!
//! [`ResourceActor`]: crate::ResourceActor

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// The hooks are `async` and receive `&Self::Context`, which is handed to
/// [`ResourceActor::run`](crate::ResourceActor::run) rather than to the
/// constructor. A store that needs no collaborators uses `()`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier of a record. Must be buildable from the sequencer's `u32`.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload used to create a record.
    type Create: Send + Sync + Debug;

    /// Partial payload used to update a record.
    type Update: Send + Sync + Debug;

    /// Record-specific operation executed inside the store task.
    /// Use `std::convert::Infallible` when there is none.
    type Action: Send + Sync + Debug;

    /// Result of a custom action.
    type ActionResult: Send + Sync + Debug;

    /// Collaborators injected into every hook.
    type Context: Send + Sync;

    /// One error type per record kind. It travels back to the client boxed inside
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) and can
    /// be recovered with
    /// [`FrameworkError::into_entity_error`](crate::FrameworkError::into_entity_error).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the record from a freshly issued (or externally supplied) id.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Reject the candidate if it collides with `existing` (uniqueness rules).
    fn check_conflict(&self, _existing: &Self) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and conflict checks, before insertion.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply a partial update. The actor runs this on a copy and only commits the
    /// copy when the hook succeeds, so an error leaves the stored record untouched.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a record-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
