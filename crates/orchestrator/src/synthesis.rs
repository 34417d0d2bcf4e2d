//! Perspective collection and synthesis
//!
//! Collection isolates per-agent faults; synthesis merges perspectives into
//! one result whose confidence is the unweighted arithmetic mean of the
//! individual confidences.

use personaswarm_agent_core::{Agent, AgentId, Perspective, Task};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Confidence assigned to the single fabricated fallback perspective
pub const FALLBACK_CONFIDENCE: f64 = 0.3;

/// The merged result of one synthesis round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisResult {
    /// Structural summary naming the contributor count
    pub summary: String,
    /// Unweighted mean of perspective confidences
    pub confidence: f64,
    /// Ordered contributing agent identifiers
    pub sources: Vec<AgentId>,
    /// Number of merged perspectives
    pub perspective_count: usize,
    /// Sum of perspective confidences (bookkeeping, not a weighting)
    pub total_weight: f64,
}

/// Collect one perspective per agent.
///
/// An agent whose generation fails is skipped and logged; it never aborts
/// the task. If nothing was collected and the slice is non-empty, exactly one
/// fallback perspective is fabricated from the first agent at low confidence,
/// so synthesis never operates on an empty set.
pub fn collect_perspectives<'a, I>(agents: I, task: &Task, rng: &mut StdRng) -> Vec<Perspective>
where
    I: IntoIterator<Item = &'a mut Agent>,
{
    let mut agents: Vec<&mut Agent> = agents.into_iter().collect();
    let mut perspectives = Vec::with_capacity(agents.len());

    for agent in agents.iter_mut() {
        match agent.generate_perspective(task, rng) {
            Ok(perspective) => perspectives.push(perspective),
            Err(err) => {
                warn!(agent = %agent.id, error = %err, "perspective generation failed, skipping agent");
            }
        }
    }

    if perspectives.is_empty() {
        if let Some(fallback) = agents.first() {
            perspectives.push(Perspective {
                agent_id: fallback.id.clone(),
                role: fallback.role.clone(),
                content: format!("Fallback analysis for {} task", task.kind),
                confidence: FALLBACK_CONFIDENCE,
            });
        }
    }

    perspectives
}

/// Merge perspectives into a single result.
///
/// The confidence is the exact arithmetic mean of the individual
/// confidences; the per-perspective weight only feeds `total_weight`
/// bookkeeping.
pub fn synthesize(perspectives: &[Perspective]) -> SynthesisResult {
    if perspectives.is_empty() {
        return SynthesisResult {
            summary: "No perspectives available".to_string(),
            confidence: 0.0,
            sources: Vec::new(),
            perspective_count: 0,
            total_weight: 0.0,
        };
    }

    let total_weight: f64 = perspectives.iter().map(|p| p.confidence).sum();
    let confidence = total_weight / perspectives.len() as f64;

    SynthesisResult {
        summary: format!("Integrated analysis from {} agents", perspectives.len()),
        confidence,
        sources: perspectives.iter().map(|p| p.agent_id.clone()).collect(),
        perspective_count: perspectives.len(),
        total_weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use personaswarm_agent_core::{TaskId, TaskKind};
    use rand::SeedableRng;

    fn perspective(id: &str, confidence: f64) -> Perspective {
        Perspective {
            agent_id: AgentId::new(id),
            role: "tester".to_string(),
            content: "content".to_string(),
            confidence,
        }
    }

    #[test]
    fn test_confidence_is_exact_mean() {
        let result = synthesize(&[
            perspective("a", 0.2),
            perspective("b", 0.4),
            perspective("c", 0.9),
        ]);
        assert!((result.confidence - 0.5).abs() < 1e-12);
        assert_eq!(result.perspective_count, 3);
        assert!((result.total_weight - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_sources_preserve_order() {
        let result = synthesize(&[perspective("first", 0.5), perspective("second", 0.5)]);
        assert_eq!(result.sources[0], AgentId::new("first"));
        assert_eq!(result.sources[1], AgentId::new("second"));
    }

    #[test]
    fn test_empty_set_yields_zero_confidence() {
        let result = synthesize(&[]);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.summary, "No perspectives available");
    }

    #[test]
    fn test_confidence_stays_in_unit_interval() {
        let result = synthesize(&[perspective("a", 1.0), perspective("b", 1.0)]);
        assert!(result.confidence <= 1.0);
        let result = synthesize(&[perspective("a", 0.0)]);
        assert!(result.confidence >= 0.0);
    }

    #[test]
    fn test_failing_agents_are_skipped_with_single_fallback() {
        let mut rng = StdRng::seed_from_u64(5);
        // empty topic makes every generation call fail
        let task = Task::new(TaskId::new("t"), TaskKind::General, "");
        let mut agents = vec![
            Agent::new(AgentId::new("a1"), "writer", vec![]),
            Agent::new(AgentId::new("a2"), "writer", vec![]),
        ];

        let perspectives = collect_perspectives(&mut agents, &task, &mut rng);
        assert_eq!(perspectives.len(), 1);
        assert_eq!(perspectives[0].confidence, FALLBACK_CONFIDENCE);
        assert_eq!(perspectives[0].agent_id, AgentId::new("a1"));
        assert!(perspectives[0].content.contains("Fallback analysis"));
    }
}
