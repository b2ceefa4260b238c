use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

use super::credential::Secret;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a registered user. Never carries the user's secret; that lives in
/// the credential store under the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
}

/// Profile fields used to create a [`User`].
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
}

/// Request body for registering a user: profile plus password.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistration {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub password: String,
}

impl UserRegistration {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        full_name: Option<&str>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            full_name: full_name.map(str::to_string),
            password: password.into(),
        }
    }

    /// Splits the body into what the user store keeps and what the credential
    /// store keeps.
    pub fn into_parts(self) -> (UserCreate, Secret) {
        let profile = UserCreate {
            username: self.username,
            email: self.email,
            full_name: self.full_name,
        };
        (profile, Secret::new(self.password))
    }
}

impl Debug for UserRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRegistration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_reads_camel_case_and_hides_password() {
        let body = r#"{"username":"jane_doe","email":"jane@example.com","fullName":"Jane Doe","password":"s3cret-pass"}"#;
        let registration: UserRegistration = serde_json::from_str(body).unwrap();
        assert_eq!(registration.full_name.as_deref(), Some("Jane Doe"));

        let debug = format!("{registration:?}");
        assert!(!debug.contains("s3cret-pass"));

        let (profile, secret) = registration.into_parts();
        assert_eq!(profile.username, "jane_doe");
        assert_eq!(secret.expose(), "s3cret-pass");
    }

    #[test]
    fn registration_requires_password() {
        let body = r#"{"username":"jane_doe","email":"jane@example.com"}"#;
        assert!(serde_json::from_str::<UserRegistration>(body).is_err());
    }

    #[test]
    fn user_json_has_no_secret_field() {
        let user = User {
            id: UserId(1),
            username: "admin".into(),
            email: "admin@example.com".into(),
            full_name: Some("Administrator".into()),
        };
        let json = serde_json::to_value(&user).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        assert!(keys.contains(&"fullName"));
        assert!(!keys.iter().any(|k| k.contains("pass") || k.contains("secret")));
    }
}
