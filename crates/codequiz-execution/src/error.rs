//! Error types for the execution subsystem

use thiserror::Error;

/// Execution subsystem error.
///
/// Only the interpreter bootstrap surfaces typed errors; run outcomes are
/// always rendered into output text so failures never propagate to the
/// host page.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The embedded interpreter failed to initialize.
    #[error("interpreter bootstrap failed: {0}")]
    BootstrapFailed(String),

    /// A blocking interpreter task was cancelled or panicked.
    #[error("interpreter task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl ExecutionError {
    /// Create a bootstrap failure.
    pub fn bootstrap_failed(message: impl Into<String>) -> Self {
        ExecutionError::BootstrapFailed(message.into())
    }
}

/// Result type for execution operations.
pub type ExecutionResult<T> = Result<T, ExecutionError>;
