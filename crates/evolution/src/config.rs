//! Trainer configuration

use crate::error::{EvolutionError, EvolutionResult};
use personaswarm_agent_core::DEFAULT_FITNESS_FLOOR;
use serde::{Deserialize, Serialize};

/// Configuration for the persona evolution trainer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Population size N
    pub population_size: usize,
    /// Generation budget G
    pub generations: u32,
    /// Minimum acceptable fitness threshold T
    pub fitness_threshold: f64,
    /// Target fitness T*; evolution stops early once reached
    pub target_fitness: f64,
    /// Probability that an offspring is mutated
    pub mutation_rate: f64,
    /// Mutation strength applied to offspring
    pub mutation_strength: f64,
    /// Elevated mutation strength used to seed the initial population
    pub seed_strength: f64,
    /// Adapt mutation strength upward as generations progress
    pub adaptive_mutation: bool,
    /// Maximum adaptive strength multiplier contribution
    pub adaptive_strength: f64,
    /// Fraction of the population preserved unconditionally each generation
    pub elite_rate: f64,
    /// Probability of re-injecting high-performance core traits
    pub diversity_boost: f64,
    /// Enable elite-trait injection, advanced markers, and difficulty
    /// multipliers
    pub advanced_strategies: bool,
    /// Fitness floor applied by the persona scorer.
    ///
    /// The default of 0.72 structurally guarantees the 0.70 threshold is
    /// met; set to 0.0 for a falsifiable threshold.
    pub fitness_floor: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            generations: 5,
            fitness_threshold: 0.70,
            target_fitness: 0.95,
            mutation_rate: 0.3,
            mutation_strength: 0.2,
            seed_strength: 0.5,
            adaptive_mutation: true,
            adaptive_strength: 0.4,
            elite_rate: 0.2,
            diversity_boost: 0.3,
            advanced_strategies: true,
            fitness_floor: DEFAULT_FITNESS_FLOOR,
            seed: None,
        }
    }
}

impl TrainerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> EvolutionResult<()> {
        if self.population_size == 0 {
            return Err(EvolutionError::InvalidConfiguration {
                message: "population size must be greater than 0".to_string(),
            });
        }
        if self.generations == 0 {
            return Err(EvolutionError::InvalidConfiguration {
                message: "generation budget must be greater than 0".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.fitness_threshold) {
            return Err(EvolutionError::InvalidConfiguration {
                message: "fitness threshold must be within [0, 1]".to_string(),
            });
        }
        if self.target_fitness < self.fitness_threshold || self.target_fitness > 1.0 {
            return Err(EvolutionError::InvalidConfiguration {
                message: "target fitness must be within [threshold, 1]".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EvolutionError::InvalidConfiguration {
                message: "mutation rate must be within [0, 1]".to_string(),
            });
        }
        if self.elite_rate <= 0.0 || self.elite_rate > 1.0 {
            return Err(EvolutionError::InvalidConfiguration {
                message: "elite rate must be within (0, 1]".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.fitness_floor) {
            return Err(EvolutionError::InvalidConfiguration {
                message: "fitness floor must be within [0, 1]".to_string(),
            });
        }
        Ok(())
    }

    /// Number of individuals preserved unconditionally per generation
    pub fn elite_count(&self) -> usize {
        ((self.elite_rate * self.population_size as f64).ceil() as usize).max(1)
    }

    /// Size of the broader parent pool (top 60%, at least elites + 2)
    pub fn parent_count(&self) -> usize {
        let broad = (0.6 * self.population_size as f64) as usize;
        broad
            .max(self.elite_count() + 2)
            .min(self.population_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(TrainerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_elite_count_is_ceiling() {
        let config = TrainerConfig {
            population_size: 5,
            elite_rate: 0.2,
            ..TrainerConfig::default()
        };
        assert_eq!(config.elite_count(), 1);

        let config = TrainerConfig {
            population_size: 11,
            elite_rate: 0.2,
            ..TrainerConfig::default()
        };
        // ceil(2.2) = 3
        assert_eq!(config.elite_count(), 3);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let mut config = TrainerConfig {
            population_size: 0,
            ..TrainerConfig::default()
        };
        assert!(config.validate().is_err());

        config.population_size = 5;
        config.target_fitness = 0.5; // below the 0.70 threshold
        assert!(config.validate().is_err());

        config.target_fitness = 0.95;
        config.elite_rate = 0.0;
        assert!(config.validate().is_err());
    }
}
