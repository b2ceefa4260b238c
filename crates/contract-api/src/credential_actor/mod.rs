//! # Credential Actor
//!
//! Keeps one secret per user id. Callers go through the [`CredentialStore`]
//! trait so the plain-text comparison can be swapped for a hashing scheme
//! without touching login or registration code.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CredentialClient;
use crate::model::{Credential, Secret, UserId};
use async_trait::async_trait;
use resource_framework::ResourceActor;

/// Secret storage as seen by the rest of the service.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Stores (or replaces) the secret for `user_id`.
    async fn set_secret(&self, user_id: UserId, secret: Secret) -> Result<(), CredentialError>;

    /// `true` only if a secret is stored for `user_id` and equals `candidate`.
    /// An unknown user is not an error, just a failed check.
    async fn verify(&self, user_id: UserId, candidate: &Secret) -> Result<bool, CredentialError>;
}

/// Creates a new Credential actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<Credential>, CredentialClient) {
    let (actor, generic_client) = ResourceActor::new(buffer);
    (actor, CredentialClient::new(generic_client))
}
