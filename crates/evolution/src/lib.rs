//! Evolutionary trainer for PersonaSwarm trait profiles
//!
//! Maintains a population of trait profiles, evaluates each against a fixed
//! probe-task suite, and evolves the population generation-over-generation
//! via elitism, crossover, and mutation.

pub mod config;
pub mod error;
pub mod operators;
pub mod population;
pub mod probes;
pub mod trainer;
pub mod vocabulary;

pub use config::TrainerConfig;
pub use error::{EvolutionError, EvolutionResult};
pub use operators::{crossover_profiles, mutate_profile, MutationContext};
pub use population::{Individual, Population};
pub use probes::probe_suite;
pub use trainer::{EvolutionReport, GenerationStats, PersonaEvolutionTrainer};
