//! Population management for persona evolution

use personaswarm_agent_core::TraitProfile;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single candidate trait profile in the population
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Individual {
    /// Unique identifier
    pub id: Uuid,
    /// The candidate profile
    pub profile: TraitProfile,
    /// Most recent evaluated fitness, if any
    pub fitness: Option<f64>,
}

impl Individual {
    /// Create a new unevaluated individual
    pub fn new(profile: TraitProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            profile,
            fitness: None,
        }
    }

    /// Evaluated fitness, or 0.0 when not yet evaluated
    pub fn fitness_or_zero(&self) -> f64 {
        self.fitness.unwrap_or(0.0)
    }
}

/// A generation of candidate profiles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Population {
    /// Candidates in this generation
    pub individuals: Vec<Individual>,
    /// Generation counter, starting at 0
    pub generation: u32,
}

impl Population {
    /// Create a population from a set of individuals
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Number of individuals
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Sort individuals by descending fitness
    pub fn sort_by_fitness(&mut self) {
        self.individuals.sort_by(|a, b| {
            b.fitness_or_zero()
                .partial_cmp(&a.fitness_or_zero())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    /// Best individual by fitness, if the population is non-empty
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.iter().max_by(|a, b| {
            a.fitness_or_zero()
                .partial_cmp(&b.fitness_or_zero())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Top `count` individuals by fitness, cloned
    pub fn select_top(&mut self, count: usize) -> Vec<Individual> {
        self.sort_by_fitness();
        self.individuals
            .iter()
            .take(count)
            .cloned()
            .collect()
    }

    /// Mean fitness across evaluated individuals
    pub fn mean_fitness(&self) -> f64 {
        if self.individuals.is_empty() {
            return 0.0;
        }
        let total: f64 = self.individuals.iter().map(|i| i.fitness_or_zero()).sum();
        total / self.individuals.len() as f64
    }
}
