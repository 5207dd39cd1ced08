//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// A remote operation failed.
///
/// Callers treat every variant the same way: log it and keep the local
/// state they had before the attempt. The variants only carry detail for
/// the log line.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Transport failed: {0}")]
    Transport(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode response: {0}")]
    Decode(String),

    #[error("Post {0} not found")]
    NotFound(PostId),

    #[error("Post {0} already exists")]
    Conflict(PostId),
}

/// Editor-level errors.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("No row is being edited")]
    NoActiveEdit,

    #[error("No post with id {0}")]
    UnknownPost(PostId),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("No post id left to assign")]
    IdsExhausted,
}
