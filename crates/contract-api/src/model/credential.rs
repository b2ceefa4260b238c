use std::fmt::{self, Debug};

use super::user::UserId;

/// A user's secret. `Debug` never prints the value.
///
/// Stored and compared as plain text; [`Secret::matches`] is the single place a
/// hashing scheme would plug in.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, candidate: &Secret) -> bool {
        self.0 == candidate.0
    }
}

impl Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

/// Credential row, keyed by the owning user's id.
#[derive(Debug, Clone)]
pub struct Credential {
    pub user_id: UserId,
    pub(crate) secret: Secret,
}

/// Operations run inside the credential store.
#[derive(Debug)]
pub enum CredentialAction {
    /// Does the stored secret equal this one?
    Verify(Secret),
}
