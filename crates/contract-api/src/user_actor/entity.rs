//! [`ActorEntity`] implementation for [`User`].
//!
//! Users are created and read, never updated through the store, so both
//! `Update` and `Action` are uninhabited.

use super::UserError;
use crate::model::{User, UserCreate, UserId};
use crate::validation;
use async_trait::async_trait;
use resource_framework::ActorEntity;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        validation::username(&params.username)?;
        validation::email(&params.email)?;
        if let Some(full_name) = &params.full_name {
            validation::full_name(full_name)?;
        }
        Ok(Self {
            id,
            username: params.username,
            email: params.email,
            full_name: params.full_name,
        })
    }

    /// Usernames and emails are unique across live users.
    fn check_conflict(&self, existing: &Self) -> Result<(), UserError> {
        if self.username == existing.username {
            return Err(UserError::Conflict("Username already registered".into()));
        }
        if self.email == existing.email {
            return Err(UserError::Conflict("Email already registered".into()));
        }
        Ok(())
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), UserError> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), UserError> {
        match action {}
    }
}
