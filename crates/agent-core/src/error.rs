//! Agent error types

use thiserror::Error;

/// Errors raised by agent operations
#[derive(Error, Debug)]
pub enum AgentError {
    /// A task was handed to an agent without the fields its behavior needs
    #[error("invalid task {task_id}: {reason}")]
    InvalidTask {
        /// Offending task identifier
        task_id: String,
        /// Why the task was rejected
        reason: String,
    },

    /// A persona operation was invoked on an agent without a trait profile
    #[error("agent {agent_id} has no trait profile")]
    MissingProfile {
        /// Offending agent identifier
        agent_id: String,
    },
}

/// Result alias for agent operations
pub type AgentResult<T> = Result<T, AgentError>;
