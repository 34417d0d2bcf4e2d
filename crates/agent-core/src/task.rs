//! Task and perspective data model

use crate::agent::AgentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique task identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub String);

impl TaskId {
    /// Create a task ID from a known name
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a random task ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task type tag, selecting the persona behavior used to answer it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// Adversarial argumentation
    Debate,
    /// Long-form reflective prose
    Essay,
    /// Critical analysis
    Criticism,
    /// Anything else
    #[default]
    General,
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TaskKind::Debate => "debate",
            TaskKind::Essay => "essay",
            TaskKind::Criticism => "criticism",
            TaskKind::General => "general",
        };
        write!(f, "{s}")
    }
}

/// Difficulty label carried by probe tasks, scaling fitness upward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Baseline difficulty, no multiplier
    #[default]
    Standard,
    /// Advanced probe (x1.1)
    Advanced,
    /// Masterful probe (x1.15)
    Masterful,
    /// Penetrating probe (x1.2)
    Penetrating,
    /// Authoritative probe (x1.25)
    Authoritative,
    /// Brilliant probe (x1.3)
    Brilliant,
    /// Devastating probe (x1.35)
    Devastating,
}

impl Difficulty {
    /// Fitness multiplier applied when advanced strategies are enabled
    pub fn multiplier(&self) -> f64 {
        match self {
            Difficulty::Standard => 1.0,
            Difficulty::Advanced => 1.1,
            Difficulty::Masterful => 1.15,
            Difficulty::Penetrating => 1.2,
            Difficulty::Authoritative => 1.25,
            Difficulty::Brilliant => 1.3,
            Difficulty::Devastating => 1.35,
        }
    }
}

/// A unit of work submitted to the swarm; immutable once submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID
    pub id: TaskId,
    /// Task type tag
    pub kind: TaskKind,
    /// Topic the swarm is asked to address
    pub topic: String,
    /// Requirement tags matched against agent capabilities
    pub requirements: Vec<String>,
    /// Expected output quality target (0.0 - 1.0)
    pub expected_quality: Option<f64>,
    /// Target completion time in seconds
    pub target_completion_time: Option<f64>,
    /// Agent count considered optimal for this task
    pub optimal_agent_count: Option<usize>,
    /// Difficulty label for probe tasks
    pub difficulty: Option<Difficulty>,
    /// Free-form auxiliary data
    pub context: Option<serde_json::Value>,
}

impl Task {
    /// Create a task with the required fields
    pub fn new(id: TaskId, kind: TaskKind, topic: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            topic: topic.into(),
            requirements: Vec::new(),
            expected_quality: None,
            target_completion_time: None,
            optimal_agent_count: None,
            difficulty: None,
            context: None,
        }
    }

    /// Set requirement tags
    pub fn with_requirements(mut self, requirements: Vec<String>) -> Self {
        self.requirements = requirements;
        self
    }

    /// Set the expected output quality target
    pub fn with_expected_quality(mut self, quality: f64) -> Self {
        self.expected_quality = Some(quality);
        self
    }

    /// Set the target completion time in seconds
    pub fn with_target_time(mut self, seconds: f64) -> Self {
        self.target_completion_time = Some(seconds);
        self
    }

    /// Set the difficulty label
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }
}

/// One agent's contribution to a task; produced once, never mutated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Perspective {
    /// Contributing agent
    pub agent_id: AgentId,
    /// Contributing agent's role label
    pub role: String,
    /// Textual contribution
    pub content: String,
    /// Contributor's confidence in the content (0.0 - 1.0)
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new(TaskId::new("t1"), TaskKind::Debate, "free will")
            .with_requirements(vec!["contrarian_analysis".to_string()])
            .with_expected_quality(0.8)
            .with_difficulty(Difficulty::Brilliant);
        assert_eq!(task.id.to_string(), "t1");
        assert_eq!(task.kind, TaskKind::Debate);
        assert_eq!(task.expected_quality, Some(0.8));
        assert_eq!(task.difficulty.unwrap().multiplier(), 1.3);
    }

    #[test]
    fn test_difficulty_multipliers_ascend() {
        let ladder = [
            Difficulty::Standard,
            Difficulty::Advanced,
            Difficulty::Masterful,
            Difficulty::Penetrating,
            Difficulty::Authoritative,
            Difficulty::Brilliant,
            Difficulty::Devastating,
        ];
        for pair in ladder.windows(2) {
            assert!(pair[0].multiplier() < pair[1].multiplier());
        }
    }

    #[test]
    fn test_task_kind_serde_tags() {
        let json = serde_json::to_string(&TaskKind::Criticism).unwrap();
        assert_eq!(json, "\"criticism\"");
    }
}
