//! Command implementations

pub mod evolve;
pub mod narrate;
pub mod reward;
pub mod swarm;

use crate::Result;
use clap::Subcommand;
use personaswarm_agent_core::TaskKind;

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Submit a task to the agent swarm
    Swarm(swarm::SwarmArgs),

    /// Evolve the persona trait corpus through generations
    Evolve(evolve::EvolveArgs),

    /// Score a swarm episode across the five reward factors
    Reward(reward::RewardArgs),

    /// Score a fused persona/audio episode against baselines
    Fusion(reward::FusionArgs),

    /// Synthesize narration for a text, reporting voice quality
    Narrate(narrate::NarrateArgs),
}

impl Commands {
    pub async fn execute(self) -> Result<()> {
        match self {
            Commands::Swarm(args) => swarm::execute(args).await,
            Commands::Evolve(args) => evolve::execute(args).await,
            Commands::Reward(args) => reward::execute(args),
            Commands::Fusion(args) => reward::execute_fusion(args),
            Commands::Narrate(args) => narrate::execute(args).await,
        }
    }
}

pub(crate) fn parse_kind(kind: &str) -> Result<TaskKind> {
    match kind.to_lowercase().as_str() {
        "debate" => Ok(TaskKind::Debate),
        "essay" => Ok(TaskKind::Essay),
        "criticism" => Ok(TaskKind::Criticism),
        "general" => Ok(TaskKind::General),
        other => Err(crate::CliError::InvalidArgument(format!(
            "Unknown task kind: {other}"
        ))),
    }
}
