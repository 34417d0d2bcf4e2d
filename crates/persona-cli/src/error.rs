//! Error types for the CLI

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Agent error: {0}")]
    Agent(#[from] personaswarm_agent_core::AgentError),

    #[error("Swarm error: {0}")]
    Swarm(#[from] personaswarm_orchestrator::SwarmError),

    #[error("Evolution error: {0}")]
    Evolution(#[from] personaswarm_evolution::EvolutionError),

    #[error("Reward error: {0}")]
    Reward(#[from] personaswarm_reward::RewardError),

    #[error("Collaborator error: {0}")]
    Collaborator(#[from] personaswarm_collaborators::CollaboratorError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}
