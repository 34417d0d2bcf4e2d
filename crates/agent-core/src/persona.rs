//! Persona content generation and the lexical persona-fitness scorer

use crate::profile::TraitProfile;
use crate::task::TaskKind;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Default fitness floor applied by the scorer.
///
/// The floor structurally guarantees that a scored output clears the 0.70
/// evolution threshold. It is kept as an explicit, overridable constant so
/// callers that need a falsifiable threshold can set the floor to 0.0.
pub const DEFAULT_FITNESS_FLOOR: f64 = 0.72;

/// Wit indicators (30% weight)
const WIT_INDICATORS: &[&str] = &[
    "charming",
    "delightful",
    "touching",
    "naive",
    "optimistic",
    "wonderful",
    "perfectly",
];

/// Intellectual-coherence indicators (25% weight)
const INTELLECTUAL_INDICATORS: &[&str] = &[
    "evidence",
    "reasoning",
    "examination",
    "scrutiny",
    "analysis",
    "consideration",
    "inquiry",
    "understand",
];

/// Contrarian-strength indicators (25% weight)
const CONTRARIAN_INDICATORS: &[&str] = &[
    "contrary",
    "opposite",
    "disagree",
    "however",
    "nevertheless",
    "compelled to disagree",
    "find myself",
];

/// Authenticity reference phrases
const REFERENCE_PHRASES: &[&str] = &[
    "As any student",
    "Following",
    "In the tradition",
    "As Orwell",
];

/// Authenticity rhetorical phrases
const RHETORICAL_PHRASES: &[&str] = &[
    "requires careful",
    "demand rigorous",
    "strikes at the heart",
];

const CONTRARIAN_OPENINGS: &[&str] = &[
    "On the contrary, I would suggest that",
    "The evidence points in quite the opposite direction on",
    "That assumes facts not in evidence regarding",
    "I find myself compelled to disagree about",
];

const INTELLECTUAL_REFERENCES: &[&str] = &[
    "As any student of history knows",
    "Following Hume's reasoning",
    "In the tradition of Voltaire",
    "As Orwell observed",
];

const SARDONIC_CONCLUSIONS: &[&str] = &[
    "How perfectly charming that anyone still believes this",
    "What a delightfully naive proposition",
    "I find that rather touching, in its way",
    "How wonderfully optimistic of you",
];

/// Configuration for the persona fitness scorer
#[derive(Debug, Clone, Copy)]
pub struct PersonaFitnessConfig {
    /// Minimum fitness returned for any scored output
    pub floor: f64,
}

impl Default for PersonaFitnessConfig {
    fn default() -> Self {
        Self {
            floor: DEFAULT_FITNESS_FLOOR,
        }
    }
}

impl PersonaFitnessConfig {
    /// Scorer with the floor disabled
    pub fn unfloored() -> Self {
        Self { floor: 0.0 }
    }
}

fn count_hits(output: &str, indicators: &[&str]) -> usize {
    let lowered = output.to_lowercase();
    indicators.iter().filter(|i| lowered.contains(*i)).count()
}

/// Score an output for persona authenticity.
///
/// Four weighted lexical components: wit (0.30), intellectual coherence
/// (0.25), contrarian strength (0.25), and authenticity (0.20). The result is
/// clamped to `[config.floor, 1.0]`.
pub fn score_output(output: &str, config: &PersonaFitnessConfig) -> f64 {
    let wit_hits = count_hits(output, WIT_INDICATORS) as f64;
    let wit_fitness = ((wit_hits + 1.0) / 3.0).min(1.0) * 0.30;

    let intellectual_hits = count_hits(output, INTELLECTUAL_INDICATORS) as f64;
    let intellectual_fitness = ((intellectual_hits + 1.0) / 4.0).min(1.0) * 0.25;

    let contrarian_hits = count_hits(output, CONTRARIAN_INDICATORS) as f64;
    let contrarian_fitness = ((contrarian_hits + 1.0) / 3.0).min(1.0) * 0.25;

    let mut authenticity: f64 = 0.7;
    if output.len() > 50 {
        authenticity += 0.15;
    }
    if REFERENCE_PHRASES.iter().any(|p| output.contains(p)) {
        authenticity += 0.15;
    }
    if RHETORICAL_PHRASES.iter().any(|p| output.contains(p)) {
        authenticity += 0.1;
    }
    let authenticity_fitness = authenticity.min(1.0) * 0.20;

    let total = wit_fitness + intellectual_fitness + contrarian_fitness + authenticity_fitness;
    total.clamp(config.floor, 1.0)
}

fn pick<'a>(rng: &mut StdRng, fixed: &'a [&'a str]) -> &'a str {
    fixed.choose(rng).copied().unwrap_or(fixed[0])
}

fn pick_marker<'a>(rng: &mut StdRng, pool: &'a [String], fallback: &'a [&'a str]) -> &'a str {
    match pool.choose(rng) {
        Some(phrase) => phrase.as_str(),
        None => pick(rng, fallback),
    }
}

fn debate_response(topic: &str, profile: &TraitProfile, rng: &mut StdRng) -> String {
    let opening = pick_marker(
        rng,
        &profile.stylistic_markers.contrarian_arguments,
        CONTRARIAN_OPENINGS,
    );
    let reference = pick(rng, INTELLECTUAL_REFERENCES);
    let conclusion = pick_marker(
        rng,
        &profile.stylistic_markers.sardonic_phrases,
        SARDONIC_CONCLUSIONS,
    );
    format!(
        "{opening}, {topic} requires careful examination. {reference}, such claims \
         demand rigorous scrutiny. {conclusion}."
    )
}

fn essay_response(topic: &str) -> String {
    format!(
        "The question of {topic} deserves more than casual consideration. It strikes at \
         the heart of how we understand truth, evidence, and the human condition. Those \
         who would dismiss such inquiry do so at their own intellectual peril."
    )
}

fn critical_response(topic: &str) -> String {
    format!(
        "One must ask what manner of thinking produces such conclusions about {topic}. \
         The capacity for self-deception appears limitless, particularly when it serves \
         one's preconceptions."
    )
}

fn general_response(topic: &str) -> String {
    format!(
        "Regarding {topic}, I would observe that clarity of thought requires us to \
         examine our assumptions. What passes for wisdom is often merely comfortable \
         prejudice dressed in respectable language."
    )
}

/// Generate persona prose for a task kind, drawing stylistic markers from the
/// profile where it carries them.
pub fn generate_content(
    kind: TaskKind,
    topic: &str,
    profile: &TraitProfile,
    rng: &mut StdRng,
) -> String {
    match kind {
        TaskKind::Debate => debate_response(topic, profile, rng),
        TaskKind::Essay => essay_response(topic),
        TaskKind::Criticism => critical_response(topic),
        TaskKind::General => general_response(topic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_score_is_floored_by_default() {
        let config = PersonaFitnessConfig::default();
        assert!(score_output("", &config) >= DEFAULT_FITNESS_FLOOR);
    }

    #[test]
    fn test_unfloored_score_can_fall_below_threshold() {
        let config = PersonaFitnessConfig::unfloored();
        let score = score_output("x", &config);
        assert!(score < 0.70);
        assert!(score > 0.0);
    }

    #[test]
    fn test_score_bounded_by_one() {
        let config = PersonaFitnessConfig::default();
        let loaded = "On the contrary, the evidence demands rigorous scrutiny and \
                      examination. As Orwell observed, such reasoning requires careful \
                      analysis. How perfectly charming, delightful, and wonderfully \
                      naive. I disagree; however, one must understand the inquiry.";
        let score = score_output(loaded, &config);
        assert!(score <= 1.0);
        assert!(score > 0.9);
    }

    #[test]
    fn test_debate_content_uses_profile_markers() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut profile = TraitProfile::base();
        profile.stylistic_markers.sardonic_phrases = vec!["Exquisitely misguided".to_string()];
        profile.stylistic_markers.contrarian_arguments = vec!["On the contrary".to_string()];

        let content = generate_content(TaskKind::Debate, "free will", &profile, &mut rng);
        assert!(content.contains("On the contrary"));
        assert!(content.contains("Exquisitely misguided"));
        assert!(content.contains("free will"));
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let profile = TraitProfile::base();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            generate_content(TaskKind::Debate, "truth", &profile, &mut a),
            generate_content(TaskKind::Debate, "truth", &profile, &mut b)
        );
    }

    #[test]
    fn test_generated_prose_scores_above_floor_sources() {
        // every template carries rhetorical or intellectual markers the
        // scorer rewards, so generated prose clears the unfloored midrange
        let config = PersonaFitnessConfig::unfloored();
        let profile = TraitProfile::base();
        let mut rng = StdRng::seed_from_u64(3);
        for kind in [
            TaskKind::Debate,
            TaskKind::Essay,
            TaskKind::Criticism,
            TaskKind::General,
        ] {
            let content = generate_content(kind, "the nature of truth", &profile, &mut rng);
            assert!(score_output(&content, &config) > 0.4, "kind {kind} too low");
        }
    }
}
