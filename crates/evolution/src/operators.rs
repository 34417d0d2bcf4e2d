//! Genetic operators: mutation and crossover over trait profiles

use crate::vocabulary::{
    ADDITIONAL_PHRASES, ADVANCED_MARKERS, CORE_TRAITS, ELITE_TRAITS, EXTENDED_TRAITS,
    MIN_CHARACTERISTICS,
};
use personaswarm_agent_core::{StylisticMarkers, TraitProfile};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Knobs that shape a single mutation pass
#[derive(Debug, Clone, Copy)]
pub struct MutationContext {
    /// Scale mutation strength with generation progress
    pub adaptive: bool,
    /// Maximum adaptive multiplier contribution
    pub adaptive_strength: f64,
    /// Generation progress in [0, 1]
    pub progress: f64,
    /// Probability of re-injecting lost core traits
    pub diversity_boost: f64,
    /// Enable elite-trait and advanced-marker injection
    pub advanced: bool,
}

impl Default for MutationContext {
    fn default() -> Self {
        Self {
            adaptive: true,
            adaptive_strength: 0.4,
            progress: 0.0,
            diversity_boost: 0.3,
            advanced: true,
        }
    }
}

/// Mutate a profile in place with the given base strength.
///
/// Strength scales adaptively with generation progress so late generations
/// explore harder. Characteristic removal never drops the profile below the
/// minimum trait count.
pub fn mutate_profile(
    profile: &mut TraitProfile,
    strength: f64,
    context: &MutationContext,
    rng: &mut StdRng,
) {
    let effective = if context.adaptive {
        strength * (1.0 + context.adaptive_strength * context.progress.clamp(0.0, 1.0))
    } else {
        strength
    };

    // Characteristic mutation: 1-3 events, biased toward addition.
    let events = 1 + (effective * 2.0).round() as usize;
    for _ in 0..events.min(3) {
        if rng.gen_bool(0.6) {
            if let Some(trait_name) = EXTENDED_TRAITS.choose(rng) {
                profile.add_characteristic(trait_name);
            }
        } else if profile.characteristics.len() > MIN_CHARACTERISTICS {
            let index = rng.gen_range(0..profile.characteristics.len());
            profile.characteristics.remove(index);
        }
    }

    // Phrase mutation: 1-2 new sardonic phrases.
    let phrase_events = 1 + usize::from(effective > 0.35);
    for _ in 0..phrase_events {
        if let Some(phrase) = ADDITIONAL_PHRASES.choose(rng) {
            profile.add_sardonic_phrase(phrase);
        }
    }

    // Diversity boost: occasionally restore the high-signal base traits.
    if rng.gen_bool(context.diversity_boost.clamp(0.0, 1.0)) {
        profile.add_characteristic("intellectual");
        profile.add_characteristic("contrarian");
    }

    if context.advanced {
        if rng.gen_bool(0.4) {
            if let Some(trait_name) = ELITE_TRAITS.choose(rng) {
                profile.add_characteristic(trait_name);
            }
        }
        if rng.gen_bool(0.3) {
            if let Some(marker) = ADVANCED_MARKERS.choose(rng) {
                profile.add_sardonic_phrase(marker);
            }
        }
        // Back-fill core traits when the profile has thinned out.
        if profile.characteristics.len() < 6 && rng.gen_bool(0.5) {
            if let Some(core) = CORE_TRAITS.choose(rng) {
                profile.add_characteristic(core);
            }
        }
    }
}

/// Cross two parent profiles into a child.
///
/// The child samples bounded subsets from the union of each gene pool:
/// at most 5 characteristics, 4 sardonic phrases, and 3 contrarian openers.
pub fn crossover_profiles(
    first: &TraitProfile,
    second: &TraitProfile,
    generation: u32,
    rng: &mut StdRng,
) -> TraitProfile {
    let characteristics = sample_union(
        &first.characteristics,
        &second.characteristics,
        5,
        rng,
    );
    let sardonic_phrases = sample_union(
        &first.stylistic_markers.sardonic_phrases,
        &second.stylistic_markers.sardonic_phrases,
        4,
        rng,
    );
    let contrarian_arguments = sample_union(
        &first.stylistic_markers.contrarian_arguments,
        &second.stylistic_markers.contrarian_arguments,
        3,
        rng,
    );

    let mut child = TraitProfile {
        generation,
        characteristics,
        stylistic_markers: StylisticMarkers {
            sardonic_phrases,
            contrarian_arguments,
        },
        fitness: 0.0,
    };

    // A child may never start below the minimum trait count.
    while child.characteristics.len() < MIN_CHARACTERISTICS {
        if let Some(core) = CORE_TRAITS
            .iter()
            .find(|c| !child.has_characteristic(c))
        {
            child.add_characteristic(core);
        } else {
            break;
        }
    }
    child
}

fn sample_union(
    first: &[String],
    second: &[String],
    limit: usize,
    rng: &mut StdRng,
) -> Vec<String> {
    let mut pool: Vec<&String> = first.iter().collect();
    for item in second {
        if !pool.iter().any(|existing| *existing == item) {
            pool.push(item);
        }
    }
    pool.choose_multiple(rng, limit.min(pool.len()))
        .map(|s| (*s).clone())
        .collect()
}
