//! Reward error types

use thiserror::Error;

/// Errors raised by the reward engines
#[derive(Error, Debug)]
pub enum RewardError {
    /// Invalid baseline configuration
    #[error("invalid reward baseline: {message}")]
    InvalidBaseline {
        /// What was wrong
        message: String,
    },
}

/// Result alias for reward operations
pub type RewardResult<T> = Result<T, RewardError>;
