//! Orchestrator error types

use thiserror::Error;

/// Errors raised by the swarm orchestrator
#[derive(Error, Debug)]
pub enum SwarmError {
    /// The orchestrator was used before any agents were spawned
    #[error("agent pool is empty; orchestrator was never initialized")]
    EmptyPool,

    /// Invalid orchestrator configuration
    #[error("invalid swarm configuration: {message}")]
    InvalidConfiguration {
        /// What was wrong
        message: String,
    },
}

/// Result alias for orchestrator operations
pub type SwarmResult<T> = Result<T, SwarmError>;
