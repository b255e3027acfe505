//! Server error types.

use thiserror::Error;

/// Errors from running the API server. Per-request failures never surface
/// here; they become JSON error responses. These are loop-fatal conditions.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be bound.
    #[error("Failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    /// The blocking accept task failed to join.
    #[error("Accept task failed: {0}")]
    Accept(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
