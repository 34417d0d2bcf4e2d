//! Swarm agents: capability matching, mode-gated perspective generation,
//! and per-agent performance ledgers

use crate::error::{AgentError, AgentResult};
use crate::mode::{ModeState, RiperMode};
use crate::persona::{self, PersonaFitnessConfig};
use crate::profile::TraitProfile;
use crate::task::{Perspective, Task, TaskKind};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

/// Base capabilities every persona agent carries
const PERSONA_CAPABILITIES: &[&str] = &[
    "sardonic_commentary",
    "contrarian_analysis",
    "intellectual_discourse",
    "debate_argumentation",
    "literary_criticism",
];

/// Default confidence assigned to a freshly spawned agent
const INITIAL_CONFIDENCE: f64 = 0.7;

/// Unique agent identifier: `{role}_{index}_{8-hex}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub String);

impl AgentId {
    /// Create an agent ID from a known string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive an ID for a role at a pool index, with a random suffix
    pub fn for_role(role: &str, index: usize) -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!("{role}_{index}_{}", &suffix[..8]))
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-agent performance ledger
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceLedger {
    /// Tasks this agent contributed to
    pub tasks_completed: u64,
    /// Running mean of contribution quality
    pub avg_quality_score: f64,
    /// Collaborations participated in
    pub collaboration_count: u64,
    /// Rejected mode-transition attempts
    pub mode_violations: u64,
}

impl PerformanceLedger {
    /// Fold one quality sample into the running mean
    pub fn record_quality(&mut self, quality: f64) {
        self.tasks_completed += 1;
        let n = self.tasks_completed as f64;
        self.avg_quality_score = (self.avg_quality_score * (n - 1.0) + quality) / n;
    }
}

/// Behavior variant an agent answers tasks with.
///
/// Replaces role-specialized subclassing: one agent type, dispatched by tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgentBehavior {
    /// Adversarial argumentation
    Debate,
    /// Long-form prose
    Essay,
    /// Critical analysis
    Criticism,
    /// Default behavior
    #[default]
    General,
}

impl AgentBehavior {
    /// Behavior matching a task kind
    pub fn for_kind(kind: TaskKind) -> Self {
        match kind {
            TaskKind::Debate => AgentBehavior::Debate,
            TaskKind::Essay => AgentBehavior::Essay,
            TaskKind::Criticism => AgentBehavior::Criticism,
            TaskKind::General => AgentBehavior::General,
        }
    }
}

/// A stateful swarm worker with a capability set, confidence score, and
/// protocol mode register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Unique identifier
    pub id: AgentId,
    /// Role label
    pub role: String,
    /// Ordered capability tags
    pub capabilities: Vec<String>,
    /// Current confidence (0.0 - 1.0)
    pub confidence: f64,
    /// Protocol mode state
    pub mode: ModeState,
    /// Behavior tag
    pub behavior: AgentBehavior,
    /// Persona trait profile, when this agent embodies one
    pub profile: Option<TraitProfile>,
    /// Performance ledger
    pub ledger: PerformanceLedger,
}

impl Agent {
    /// Spawn a plain agent
    pub fn new(id: AgentId, role: impl Into<String>, capabilities: Vec<String>) -> Self {
        Self {
            id,
            role: role.into(),
            capabilities,
            confidence: INITIAL_CONFIDENCE,
            mode: ModeState::new(),
            behavior: AgentBehavior::General,
            profile: None,
            ledger: PerformanceLedger::default(),
        }
    }

    /// Spawn a persona agent embodying a trait profile
    pub fn with_profile(id: AgentId, role: impl Into<String>, profile: TraitProfile) -> Self {
        let capabilities = PERSONA_CAPABILITIES
            .iter()
            .map(|c| c.to_string())
            .collect();
        let mut agent = Self::new(id, role, capabilities);
        agent.profile = Some(profile);
        agent
    }

    /// Whether this agent embodies a persona profile
    pub fn is_persona(&self) -> bool {
        self.profile.is_some()
    }

    /// Whether any requirement tag substring-matches any capability tag,
    /// case-insensitively
    pub fn can_contribute(&self, task: &Task) -> bool {
        task.requirements.iter().any(|req| {
            let req = req.to_lowercase();
            self.capabilities
                .iter()
                .any(|cap| cap.to_lowercase().contains(&req))
        })
    }

    /// Generate this agent's perspective on a task.
    ///
    /// Persona agents answer with profile-driven prose and re-anchor their
    /// confidence to the scored fitness; plain agents answer according to
    /// their current protocol mode. Every call appends an observation.
    pub fn generate_perspective(
        &mut self,
        task: &Task,
        rng: &mut StdRng,
    ) -> AgentResult<Perspective> {
        if task.topic.trim().is_empty() {
            return Err(AgentError::InvalidTask {
                task_id: task.id.to_string(),
                reason: "empty topic".to_string(),
            });
        }

        let content = if let Some(profile) = &self.profile {
            let content = persona::generate_content(task.kind, &task.topic, profile, rng);
            let fitness = persona::score_output(&content, &PersonaFitnessConfig::default());
            self.confidence = fitness.clamp(0.3, 1.0);
            self.mode
                .add_observation(&format!("Generated persona perspective for {}", task.kind));
            content
        } else {
            match self.mode.current_mode {
                RiperMode::Research => {
                    self.mode
                        .add_observation(&format!("Generated research perspective for {}", task.kind));
                    format!("RESEARCH OBSERVATIONS: {} analysis of {}", self.role, task.kind)
                }
                RiperMode::Innovate => {
                    self.mode.add_observation(&format!(
                        "Generated innovation perspective for {}",
                        task.kind
                    ));
                    format!(
                        "INNOVATION PROPOSALS: {} creative approach to {}",
                        self.role, task.kind
                    )
                }
                RiperMode::Plan => {
                    self.mode
                        .add_observation(&format!("Generated planning perspective for {}", task.kind));
                    format!(
                        "IMPLEMENTATION CHECKLIST: {} structured plan for {}",
                        self.role, task.kind
                    )
                }
                RiperMode::Execute | RiperMode::Review => {
                    self.mode
                        .add_observation(&format!("Generated perspective for {}", task.kind));
                    format!("{} perspective on {}", self.role, task.kind)
                }
            }
        };

        Ok(Perspective {
            agent_id: self.id.clone(),
            role: self.role.clone(),
            content,
            confidence: self.confidence,
        })
    }

    /// Attempt a mode transition.
    ///
    /// The command must be exactly `ENTER <MODE> MODE` for the requested
    /// mode; anything else is counted as a protocol violation and the mode is
    /// left unchanged. Never fatal.
    pub fn enter_mode(&mut self, mode: RiperMode, command: &str) -> bool {
        if ModeState::is_valid_command(mode, command) {
            self.mode.enter(mode);
            info!(agent = %self.id, mode = %mode, "agent entered mode");
            true
        } else {
            self.ledger.mode_violations += 1;
            warn!(agent = %self.id, "rejected invalid mode transition");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;
    use rand::SeedableRng;

    fn probe_task(kind: TaskKind) -> Task {
        Task::new(TaskId::new("t"), kind, "the nature of evidence")
            .with_requirements(vec!["analysis".to_string()])
    }

    #[test]
    fn test_capability_substring_match_is_case_insensitive() {
        let agent = Agent::new(
            AgentId::new("a1"),
            "analyst",
            vec!["Syntax_Analysis".to_string()],
        );
        let task = Task::new(TaskId::new("t"), TaskKind::General, "x")
            .with_requirements(vec!["ANALYSIS".to_string()]);
        assert!(agent.can_contribute(&task));

        let unrelated = Task::new(TaskId::new("t2"), TaskKind::General, "x")
            .with_requirements(vec!["quantum_cryptanalysis".to_string()]);
        assert!(!agent.can_contribute(&unrelated));
    }

    #[test]
    fn test_mode_gated_content() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut agent = Agent::new(AgentId::new("a1"), "researcher", vec!["research".to_string()]);

        let p = agent
            .generate_perspective(&probe_task(TaskKind::General), &mut rng)
            .unwrap();
        assert!(p.content.starts_with("RESEARCH OBSERVATIONS"));

        assert!(agent.enter_mode(RiperMode::Innovate, "ENTER INNOVATE MODE"));
        let p = agent
            .generate_perspective(&probe_task(TaskKind::General), &mut rng)
            .unwrap();
        assert!(p.content.starts_with("INNOVATION PROPOSALS"));

        assert!(agent.enter_mode(RiperMode::Execute, "ENTER EXECUTE MODE"));
        let p = agent
            .generate_perspective(&probe_task(TaskKind::General), &mut rng)
            .unwrap();
        assert!(p.content.contains("perspective on"));
    }

    #[test]
    fn test_invalid_command_counts_violation_and_keeps_mode() {
        let mut agent = Agent::new(AgentId::new("a1"), "writer", vec![]);
        assert!(!agent.enter_mode(RiperMode::Plan, "please enter plan mode"));
        assert!(!agent.enter_mode(RiperMode::Plan, "ENTER EXECUTE MODE"));
        assert_eq!(agent.ledger.mode_violations, 2);
        assert_eq!(agent.mode.current_mode, RiperMode::Research);
    }

    #[test]
    fn test_each_generation_appends_observation() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut agent = Agent::new(AgentId::new("a1"), "writer", vec![]);
        for _ in 0..3 {
            agent
                .generate_perspective(&probe_task(TaskKind::General), &mut rng)
                .unwrap();
        }
        assert_eq!(agent.mode.observations.len(), 3);
    }

    #[test]
    fn test_persona_agent_reanchors_confidence() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut agent = Agent::with_profile(
            AgentId::new("p1"),
            "persona_debater",
            TraitProfile::base(),
        );
        let p = agent
            .generate_perspective(&probe_task(TaskKind::Debate), &mut rng)
            .unwrap();
        assert!(p.confidence >= 0.3 && p.confidence <= 1.0);
        assert_eq!(p.confidence, agent.confidence);
        assert!(p.content.contains("the nature of evidence"));
    }

    #[test]
    fn test_empty_topic_is_a_generation_fault() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut agent = Agent::new(AgentId::new("a1"), "writer", vec![]);
        let task = Task::new(TaskId::new("t"), TaskKind::General, "  ");
        assert!(agent.generate_perspective(&task, &mut rng).is_err());
    }

    #[test]
    fn test_ledger_running_mean() {
        let mut ledger = PerformanceLedger::default();
        ledger.record_quality(0.5);
        ledger.record_quality(1.0);
        assert!((ledger.avg_quality_score - 0.75).abs() < 1e-12);
        assert_eq!(ledger.tasks_completed, 2);
    }
}
