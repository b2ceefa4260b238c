//! Error types for the User actor.

use crate::validation::ValidationError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// A field failed its validation rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Username or email is already taken by another user.
    #[error("{0}")]
    Conflict(String),

    /// The store could not be reached.
    #[error("User store error: {0}")]
    Store(String),
}
