//! # Credential Client
//!
//! The actor-backed [`CredentialStore`].

use crate::credential_actor::{CredentialError, CredentialStore};
use crate::model::{Credential, CredentialAction, Secret, UserId};
use async_trait::async_trait;
use resource_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Credential actor.
#[derive(Clone)]
pub struct CredentialClient {
    inner: ResourceClient<Credential>,
}

impl CredentialClient {
    pub fn new(inner: ResourceClient<Credential>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Credential> for CredentialClient {
    type Error = CredentialError;

    fn inner(&self) -> &ResourceClient<Credential> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> CredentialError {
        match e {
            FrameworkError::NotFound(id) => CredentialError::NotFound(id),
            other => other
                .into_entity_error::<CredentialError>()
                .unwrap_or_else(|e| CredentialError::Store(e.to_string())),
        }
    }
}

#[async_trait]
impl CredentialStore for CredentialClient {
    #[instrument(skip(self, secret))]
    async fn set_secret(&self, user_id: UserId, secret: Secret) -> Result<(), CredentialError> {
        debug!("Sending request");
        self.inner
            .put(user_id, secret)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, candidate))]
    async fn verify(&self, user_id: UserId, candidate: &Secret) -> Result<bool, CredentialError> {
        debug!("Sending request");
        let action = CredentialAction::Verify(candidate.clone());
        match self.inner.perform_action(user_id, action).await {
            Ok(matched) => Ok(matched),
            Err(FrameworkError::NotFound(_)) => Ok(false),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_framework::mock::{create_mock_client, expect_action, expect_put};

    #[tokio::test]
    async fn set_secret_puts_under_user_id() {
        let (client, mut receiver) = create_mock_client::<Credential>(4);
        let client = CredentialClient::new(client);

        let request = tokio::spawn(async move {
            client.set_secret(UserId(7), Secret::new("hunter2hunter2")).await
        });

        let (id, secret, respond_to) = expect_put(&mut receiver).await.unwrap();
        assert_eq!(id, UserId(7));
        assert_eq!(secret.expose(), "hunter2hunter2");
        respond_to
            .send(Ok(Credential { user_id: id, secret }))
            .unwrap();

        request.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn verify_of_unknown_user_is_false() {
        let (client, mut receiver) = create_mock_client::<Credential>(4);
        let client = CredentialClient::new(client);

        let request = tokio::spawn(async move {
            client.verify(UserId(42), &Secret::new("whatever1")).await
        });

        let (id, action, respond_to) = expect_action(&mut receiver).await.unwrap();
        assert_eq!(id, UserId(42));
        assert!(matches!(action, CredentialAction::Verify(_)));
        respond_to
            .send(Err(FrameworkError::NotFound("42".into())))
            .unwrap();

        assert!(!request.await.unwrap().unwrap());
    }
}
