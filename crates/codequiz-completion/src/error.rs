//! Error types for the completion subsystem

use thiserror::Error;

/// Completion subsystem error.
///
/// The provider lifecycle itself has no observable error conditions (a
/// missing catalog entry is a documented fallback); errors here come from
/// the optional remote suggestion service.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Transport-level failure talking to the remote suggestion service.
    #[error("remote suggestion request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote suggestion service answered with a non-success status.
    #[error("remote suggestion service returned status {status}: {body}")]
    RemoteStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The remote response did not match the expected wire shape.
    #[error("malformed remote suggestion response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CompletionError {
    /// Create a remote-status error.
    pub fn remote_status(status: u16, body: impl Into<String>) -> Self {
        CompletionError::RemoteStatus {
            status,
            body: body.into(),
        }
    }
}

/// Result type for completion operations.
pub type CompletionResult<T> = Result<T, CompletionError>;
