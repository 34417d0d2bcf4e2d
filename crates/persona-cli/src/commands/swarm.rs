//! Swarm command implementation

use crate::commands::parse_kind;
use crate::{output, Result};
use clap::Args;
use personaswarm_agent_core::{Task, TaskId};
use personaswarm_collaborators::ProfileStore;
use personaswarm_orchestrator::{SwarmConfig, SwarmOrchestrator};
use personaswarm_reward::{EpisodeOutcome, RewardEngine};

#[derive(Debug, Clone, Args)]
pub struct SwarmArgs {
    /// Topic the swarm should address
    pub topic: String,

    /// Task kind (debate, essay, criticism, general)
    #[arg(short, long, default_value = "general")]
    pub kind: String,

    /// Requirement tags matched against agent capabilities
    #[arg(short, long, value_delimiter = ',')]
    pub requirements: Vec<String>,

    /// Initial agent pool size
    #[arg(long, default_value_t = 8)]
    pub agents: usize,

    /// Use the standard agent templates instead of heavy mode
    #[arg(long)]
    pub standard: bool,

    /// Route the task through persona agents from the corpus
    #[arg(short, long)]
    pub persona: bool,

    /// Persona corpus document
    #[arg(long, default_value = "persona_corpus.json")]
    pub corpus: String,

    /// Random seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Expected output quality used for reward scoring
    #[arg(long, default_value_t = 0.7)]
    pub expected_quality: f64,

    /// Emit the full result as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: SwarmArgs) -> Result<()> {
    let kind = parse_kind(&args.kind)?;
    let requirements = if args.requirements.is_empty() {
        vec!["analysis".to_string()]
    } else {
        args.requirements.clone()
    };

    if !args.json {
        output::info(&format!(
            "Dispatching '{}' to a swarm of {} agents",
            args.topic, args.agents
        ));
    }

    let config = SwarmConfig {
        initial_agent_count: args.agents,
        heavy_mode: !args.standard,
        seed: args.seed,
    };
    let mut orchestrator = SwarmOrchestrator::new(config)?;

    let task = Task::new(TaskId::generate(), kind, &args.topic)
        .with_requirements(requirements)
        .with_expected_quality(args.expected_quality);

    let result = if args.persona {
        let corpus = ProfileStore::new(&args.corpus).load();
        orchestrator.spawn_persona_agents(&corpus.profile);
        orchestrator.submit_persona_task(task).await?
    } else {
        orchestrator.submit_task(task).await?
    };

    let mut reward_engine = match args.seed {
        Some(seed) => RewardEngine::seeded(seed),
        None => RewardEngine::new(),
    };
    let outcome = EpisodeOutcome {
        confidence: result.result.confidence,
        participating_agents: result.participating_agents.clone(),
        completion_time: result.completion_time,
    };
    let reward = reward_engine.record_episode(&outcome, &result.task);

    if args.json {
        let report = serde_json::json!({
            "result": result,
            "reward": reward,
            "metrics": orchestrator.metrics(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::header("Swarm result");
    output::kv("Task", &result.task_id.to_string());
    output::kv("Confidence", &format!("{:.3}", result.result.confidence));
    output::kv("Agents", &result.participating_agents.len().to_string());
    if let Some(fitness) = result.persona_fitness {
        output::kv("Persona fitness", &format!("{fitness:.3}"));
    }
    output::kv("Reward", &format!("{:.3}", reward.total_reward));
    output::bullet(&result.result.summary);
    if reward.is_success() {
        output::success("Episode succeeded");
    } else {
        output::warn("Episode below success threshold");
    }
    Ok(())
}
