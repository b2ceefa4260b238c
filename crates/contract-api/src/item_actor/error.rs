//! Error types for the Item actor.

use crate::validation::ValidationError;
use thiserror::Error;

/// Errors that can occur during item operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ItemError {
    /// The requested item was not found.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// A field failed its validation rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store could not be reached.
    #[error("Item store error: {0}")]
    Store(String),
}
