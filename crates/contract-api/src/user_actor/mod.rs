//! # User Actor
//!
//! Owns the user profiles. The store has no collaborators (`Context = ()`);
//! uniqueness of usernames and emails is enforced by
//! [`ActorEntity::check_conflict`](resource_framework::ActorEntity::check_conflict)
//! inside the store task, so two concurrent registrations cannot both win.
//!
//! Secrets are not kept here; see [`credential_actor`](crate::credential_actor).

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use resource_framework::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer);
    (actor, UserClient::new(generic_client))
}
