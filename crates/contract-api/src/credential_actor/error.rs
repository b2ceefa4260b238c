use thiserror::Error;

/// Errors that can occur during credential operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CredentialError {
    #[error("Credential not found: {0}")]
    NotFound(String),

    #[error("Credential store error: {0}")]
    Store(String),
}
