use thiserror::Error;

/// Failures while starting, resetting, or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Seeding failed: {0}")]
    Seed(String),

    #[error("Snapshot failed: {0}")]
    Snapshot(String),

    #[error("Reset failed: {0}")]
    Reset(String),

    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}
