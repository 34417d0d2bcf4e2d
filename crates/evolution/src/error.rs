//! Evolution error types

use thiserror::Error;

/// Errors raised by the evolutionary trainer
#[derive(Error, Debug)]
pub enum EvolutionError {
    /// The population has no individuals
    #[error("population empty")]
    PopulationEmpty,

    /// Invalid trainer configuration
    #[error("invalid trainer configuration: {message}")]
    InvalidConfiguration {
        /// What was wrong
        message: String,
    },

    /// Fitness evaluation failed for a whole generation
    #[error("fitness evaluation failed: {reason}")]
    FitnessEvaluationFailed {
        /// Why evaluation failed
        reason: String,
    },
}

/// Result alias for trainer operations
pub type EvolutionResult<T> = Result<T, EvolutionError>;
