//! [`ActorEntity`] implementation for [`Credential`].
//!
//! Credentials are keyed by the owning user's id and written with `put`, never
//! with the sequencer. Verification runs as an action so the stored secret does
//! not leave the store task.

use super::CredentialError;
use crate::model::{Credential, CredentialAction, Secret, UserId};
use async_trait::async_trait;
use resource_framework::ActorEntity;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Credential {
    type Id = UserId;
    type Create = Secret;
    type Update = Infallible;
    type Action = CredentialAction;
    type ActionResult = bool;
    type Context = ();
    type Error = CredentialError;

    fn from_create_params(user_id: UserId, secret: Secret) -> Result<Self, CredentialError> {
        Ok(Self { user_id, secret })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), CredentialError> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: CredentialAction,
        _ctx: &(),
    ) -> Result<bool, CredentialError> {
        match action {
            CredentialAction::Verify(candidate) => Ok(self.secret.matches(&candidate)),
        }
    }
}
