//! Reward and fusion command implementations

use crate::{output, Result};
use clap::Args;
use personaswarm_agent_core::{AgentId, Task, TaskId, TaskKind};
use personaswarm_reward::{
    EpisodeOutcome, FixedSampler, FusionBaselines, FusionOutcome, FusionRewardEngine,
    RewardEngine,
};

#[derive(Debug, Clone, Args)]
pub struct RewardArgs {
    /// Synthesis confidence of the episode
    #[arg(long, default_value_t = 0.85)]
    pub confidence: f64,

    /// Number of participating agents
    #[arg(long, default_value_t = 3)]
    pub agents: usize,

    /// Completion time in seconds
    #[arg(long, default_value_t = 4.2)]
    pub completion_time: f64,

    /// Expected output quality
    #[arg(long, default_value_t = 0.8)]
    pub expected_quality: f64,

    /// Target completion time in seconds
    #[arg(long, default_value_t = 5.0)]
    pub target_time: f64,

    /// Fix the utilization sample instead of drawing one
    #[arg(long)]
    pub utilization: Option<f64>,

    /// Random seed for the utilization sampler
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit the breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: RewardArgs) -> Result<()> {
    let mut engine = match (args.utilization, args.seed) {
        (Some(utilization), _) => RewardEngine::with_sampler(Box::new(FixedSampler(utilization))),
        (None, Some(seed)) => RewardEngine::seeded(seed),
        (None, None) => RewardEngine::new(),
    };

    let task = Task::new(TaskId::new("cli_episode"), TaskKind::General, "episode")
        .with_expected_quality(args.expected_quality)
        .with_target_time(args.target_time);
    let outcome = EpisodeOutcome {
        confidence: args.confidence,
        participating_agents: (0..args.agents)
            .map(|i| AgentId::new(format!("agent_{i}")))
            .collect(),
        completion_time: args.completion_time,
    };
    let metrics = engine.record_episode(&outcome, &task);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    output::header("Reward breakdown");
    output::kv("Coverage success", &format!("{:.3}", metrics.coverage_success));
    output::kv(
        "Collaboration quality",
        &format!("{:.3}", metrics.collaboration_quality),
    );
    output::kv(
        "Completion speed",
        &format!("{:.3}", metrics.task_completion_speed),
    );
    output::kv(
        "Resource efficiency",
        &format!("{:.3}", metrics.resource_efficiency),
    );
    output::kv("Output quality", &format!("{:.3}", metrics.output_quality));
    output::kv("Total reward", &format!("{:.3}", metrics.total_reward));
    if metrics.is_success() {
        output::success("Episode above success threshold");
    } else {
        output::warn("Episode below success threshold");
    }
    Ok(())
}

#[derive(Debug, Clone, Args)]
pub struct FusionArgs {
    /// Persona fitness of the produced content
    #[arg(long, default_value_t = 0.95)]
    pub fitness: f64,

    /// Synthesis throughput estimate in episodes per hour
    #[arg(long, default_value_t = 1_694_098.0)]
    pub throughput: f64,

    /// GPU utilization (0.0-1.0)
    #[arg(long, default_value_t = 0.8)]
    pub gpu: f64,

    /// Mean opinion score of the synthesized audio
    #[arg(long, default_value_t = 4.1)]
    pub mos: f64,

    /// Emit the breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute_fusion(args: FusionArgs) -> Result<()> {
    let engine = FusionRewardEngine::new(FusionBaselines::default())?;
    let metrics = engine.calculate_reward(&FusionOutcome {
        persona_fitness: args.fitness,
        throughput_estimate: args.throughput,
        gpu_utilization: args.gpu,
        mos_score: args.mos,
    });

    if args.json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    output::header("Fusion reward breakdown");
    output::kv("Fitness component", &format!("{:.3}", metrics.fitness_component));
    output::kv(
        "Throughput component",
        &format!("{:.3}", metrics.throughput_component),
    );
    output::kv(
        "Efficiency component",
        &format!("{:.3}", metrics.efficiency_component),
    );
    output::kv("MOS component", &format!("{:.3}", metrics.mos_component));
    output::kv(
        "Excellence multiplier",
        &format!("{:.2}", metrics.excellence_multiplier),
    );
    output::kv("Total reward", &format!("{:.3}", metrics.total_reward));
    Ok(())
}
