//! # User Client
//!
//! Provides a high-level API for interacting with the `User` actor.

use crate::model::{User, UserCreate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use resource_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Linear scan; the user store is small and has no secondary index.
    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        let users = self.list().await?;
        Ok(users.into_iter().find(|user| user.username == username))
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> UserError {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            other => other
                .into_entity_error::<UserError>()
                .unwrap_or_else(|e| UserError::Store(e.to_string())),
        }
    }
}
