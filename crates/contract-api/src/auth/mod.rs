//! # Session tokens
//!
//! Placeholder authentication. A successful login yields the fixed
//! [`VALID_TOKEN`]; [`SessionTokenIssuer::authorize`] recognises only that token
//! and [`FORBIDDEN_TOKEN`]. Nothing here is cryptographic.

pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::credential_actor::CredentialStore;
use crate::model::Secret;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Token handed out on successful login.
pub const VALID_TOKEN: &str = "valid-token";

/// Token that is recognised but always refused.
pub const FORBIDDEN_TOKEN: &str = "forbidden-token";

const BEARER_PREFIX: &str = "Bearer ";

/// Checks username/secret pairs and bearer tokens.
#[derive(Clone)]
pub struct SessionTokenIssuer {
    users: UserClient,
    credentials: Arc<dyn CredentialStore>,
}

impl SessionTokenIssuer {
    pub fn new(users: UserClient, credentials: Arc<dyn CredentialStore>) -> Self {
        Self { users, credentials }
    }

    /// Returns [`VALID_TOKEN`] when some user has `username` and a stored
    /// secret equal to `secret`.
    #[instrument(skip(self, secret))]
    pub async fn login(&self, username: &str, secret: &Secret) -> Result<&'static str, AuthError> {
        if username.is_empty() {
            return Err(AuthError::MissingField("username"));
        }
        if secret.is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        let user = self
            .users
            .find_by_username(username)
            .await
            .map_err(|e| AuthError::Store(e.to_string()))?;
        let Some(user) = user else {
            debug!("Unknown username");
            return Err(AuthError::Unauthorized);
        };

        let matched = self
            .credentials
            .verify(user.id, secret)
            .await
            .map_err(|e| AuthError::Store(e.to_string()))?;
        if matched {
            Ok(VALID_TOKEN)
        } else {
            debug!(user_id = %user.id, "Secret mismatch");
            Err(AuthError::Unauthorized)
        }
    }

    /// Checks an `Authorization` header value of the form `Bearer <token>`.
    pub fn authorize(&self, header: Option<&str>) -> Result<(), AuthError> {
        authorize_bearer(header)
    }
}

/// Stateless half of [`SessionTokenIssuer::authorize`].
pub fn authorize_bearer(header: Option<&str>) -> Result<(), AuthError> {
    let token = header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or(AuthError::Unauthorized)?;

    match token {
        VALID_TOKEN => Ok(()),
        FORBIDDEN_TOKEN => Err(AuthError::Forbidden),
        _ => Err(AuthError::Unauthorized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential_actor::CredentialError;
    use crate::model::{User, UserId};
    use async_trait::async_trait;
    use resource_framework::mock::MockClient;
    use std::collections::HashMap;

    /// In-memory stand-in for the credential actor.
    struct FixedCredentials(HashMap<UserId, Secret>);

    #[async_trait]
    impl CredentialStore for FixedCredentials {
        async fn set_secret(&self, _: UserId, _: Secret) -> Result<(), CredentialError> {
            Ok(())
        }

        async fn verify(&self, user_id: UserId, candidate: &Secret) -> Result<bool, CredentialError> {
            Ok(self.0.get(&user_id).is_some_and(|s| s.matches(candidate)))
        }
    }

    fn admin() -> User {
        User {
            id: UserId(1),
            username: "admin".into(),
            email: "admin@example.com".into(),
            full_name: Some("Administrator".into()),
        }
    }

    fn issuer(mock: &MockClient<User>) -> SessionTokenIssuer {
        let credentials = FixedCredentials(HashMap::from([(UserId(1), Secret::new("adminpass"))]));
        SessionTokenIssuer::new(UserClient::new(mock.client()), Arc::new(credentials))
    }

    #[tokio::test]
    async fn login_with_matching_pair_returns_valid_token() {
        let mut mock = MockClient::<User>::new();
        mock.expect_list().return_ok(vec![admin()]);

        let token = issuer(&mock)
            .login("admin", &Secret::new("adminpass"))
            .await
            .unwrap();
        assert_eq!(token, VALID_TOKEN);
        mock.verify();
    }

    #[tokio::test]
    async fn login_rejects_wrong_secret_and_unknown_user() {
        let mut mock = MockClient::<User>::new();
        mock.expect_list().return_ok(vec![admin()]);
        mock.expect_list().return_ok(vec![admin()]);
        let issuer = issuer(&mock);

        let wrong = issuer.login("admin", &Secret::new("wrong")).await;
        assert_eq!(wrong, Err(AuthError::Unauthorized));

        let unknown = issuer.login("nobody", &Secret::new("adminpass")).await;
        assert_eq!(unknown, Err(AuthError::Unauthorized));
        mock.verify();
    }

    #[tokio::test]
    async fn login_with_empty_field_skips_the_store() {
        let mock = MockClient::<User>::new();
        let issuer = issuer(&mock);

        assert_eq!(
            issuer.login("", &Secret::new("adminpass")).await,
            Err(AuthError::MissingField("username"))
        );
        assert_eq!(
            issuer.login("admin", &Secret::new("")).await,
            Err(AuthError::MissingField("password"))
        );
    }

    #[test]
    fn authorize_three_way_outcome() {
        assert_eq!(authorize_bearer(Some("Bearer valid-token")), Ok(()));
        assert_eq!(
            authorize_bearer(Some("Bearer forbidden-token")),
            Err(AuthError::Forbidden)
        );
        assert_eq!(
            authorize_bearer(Some("Bearer garbage")),
            Err(AuthError::Unauthorized)
        );
        assert_eq!(authorize_bearer(None), Err(AuthError::Unauthorized));
    }

    #[test]
    fn authorize_requires_bearer_scheme() {
        assert_eq!(
            authorize_bearer(Some("valid-token")),
            Err(AuthError::Unauthorized)
        );
        assert_eq!(
            authorize_bearer(Some("Basic valid-token")),
            Err(AuthError::Unauthorized)
        );
        assert_eq!(authorize_bearer(Some("Bearer ")), Err(AuthError::Unauthorized));
    }

    #[test]
    fn sentinel_tokens_must_match_exactly() {
        for header in [
            "Bearer  valid-token",
            "Bearer valid-token ",
            "Bearer Valid-Token",
            "bearer valid-token",
        ] {
            assert_eq!(
                authorize_bearer(Some(header)),
                Err(AuthError::Unauthorized),
                "{header:?} must not be granted"
            );
        }
        assert_eq!(
            authorize_bearer(Some("Bearer  forbidden-token")),
            Err(AuthError::Unauthorized)
        );
    }
}
