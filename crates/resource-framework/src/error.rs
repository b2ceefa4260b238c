//! # Framework Errors
//!
//! Errors produced by the store plumbing itself. Record-level failures raised by
//! entity hooks are carried boxed in [`FrameworkError::EntityError`] so that one
//! channel type serves every record kind.

/// Errors that can occur within the resource framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    pub fn entity<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        FrameworkError::EntityError(Box::new(error))
    }

    /// Recovers the typed entity error, or hands `self` back unchanged when this
    /// is not an entity error of type `E`.
    pub fn into_entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|typed| *typed)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}
