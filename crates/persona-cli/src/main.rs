//! PersonaSwarm CLI - swarm collaboration, persona evolution, and reward
//! scoring from the command line

use clap::Parser;
use personaswarm_cli::{Cli, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    cli.command.execute().await
}
