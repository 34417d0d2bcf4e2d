//! Evolve command implementation

use crate::{output, Result};
use clap::Args;
use personaswarm_collaborators::ProfileStore;
use personaswarm_evolution::{PersonaEvolutionTrainer, TrainerConfig};

#[derive(Debug, Clone, Args)]
pub struct EvolveArgs {
    /// Generation budget
    #[arg(short, long, default_value_t = 5)]
    pub generations: u32,

    /// Population size
    #[arg(short, long, default_value_t = 10)]
    pub population: usize,

    /// Mutation rate (0.0-1.0)
    #[arg(short, long, default_value_t = 0.3)]
    pub mutation_rate: f64,

    /// Target fitness; the run stops early once reached
    #[arg(long, default_value_t = 0.95)]
    pub target: f64,

    /// Disable the fitness floor so the threshold is falsifiable
    #[arg(long)]
    pub unfloored: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Persona corpus document to evolve and write back
    #[arg(short, long, default_value = "persona_corpus.json")]
    pub corpus: String,

    /// Emit the full report as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: EvolveArgs) -> Result<()> {
    let config = TrainerConfig {
        generations: args.generations,
        population_size: args.population,
        mutation_rate: args.mutation_rate,
        target_fitness: args.target,
        fitness_floor: if args.unfloored {
            0.0
        } else {
            TrainerConfig::default().fitness_floor
        },
        seed: args.seed,
        ..TrainerConfig::default()
    };

    if !args.json {
        output::info(&format!(
            "Evolving persona over {} generations (population {})",
            args.generations, args.population
        ));
    }

    let store = ProfileStore::new(&args.corpus);
    let mut corpus = store.load();

    let mut trainer = PersonaEvolutionTrainer::new(config)?;
    let report = trainer.run(corpus.profile.clone()).await?;

    corpus.profile = report.best_profile.clone();
    store.save(&mut corpus)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::header("Evolution report");
    output::kv("Generations", &report.generations_run.to_string());
    output::kv("Best fitness", &format!("{:.4}", report.best_fitness));
    output::kv("Threshold met", &report.threshold_met.to_string());
    output::kv("Target reached", &report.target_reached.to_string());
    for stats in &report.history {
        output::bullet(&format!(
            "gen {}: best {:.4}, mean {:.4}",
            stats.generation, stats.best_fitness, stats.mean_fitness
        ));
    }
    output::success(&format!("Corpus updated: {}", store.path().display()));
    Ok(())
}
