//! Collaborator error types

use thiserror::Error;

/// Errors raised by external collaborators
#[derive(Error, Debug)]
pub enum CollaboratorError {
    /// The collaborator is unreachable or timed out
    #[error("collaborator unavailable: {reason}")]
    Unavailable {
        /// Why the collaborator could not be reached
        reason: String,
    },

    /// The corpus document could not be read or written
    #[error("corpus I/O failed: {0}")]
    CorpusIo(#[from] std::io::Error),

    /// The corpus document was present but malformed
    #[error("corpus parse failed: {0}")]
    CorpusParse(#[from] serde_json::Error),
}

/// Result alias for collaborator operations
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;
