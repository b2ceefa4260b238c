use thiserror::Error;

/// Outcomes of login and token checks other than success.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid credentials")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    /// A backing store could not be reached.
    #[error("Auth store error: {0}")]
    Store(String),
}
