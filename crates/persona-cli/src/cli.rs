//! CLI structure and argument parsing

use crate::commands::Commands;
use clap::Parser;

/// PersonaSwarm - multi-agent persona collaboration engine
#[derive(Debug, Parser)]
#[command(name = "personaswarm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Commands
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}
