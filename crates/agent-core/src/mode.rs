//! RIPER mode protocol: a locked mode register with explicit transitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lexical hedging markers scanned in observations
const HEDGING_MARKERS: &[&str] = &["assume", "probably", "might be"];

/// Compliance penalty applied per hedged observation
const COMPLIANCE_DECREMENT: f64 = 0.1;

/// RIPER protocol modes governing agent behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RiperMode {
    /// Observation and information gathering
    #[default]
    Research,
    /// Creative proposal generation
    Innovate,
    /// Structured implementation planning
    Plan,
    /// Plan execution
    Execute,
    /// Result review
    Review,
}

impl RiperMode {
    /// Protocol name of the mode as it appears in transition commands
    pub fn as_str(&self) -> &'static str {
        match self {
            RiperMode::Research => "RESEARCH",
            RiperMode::Innovate => "INNOVATE",
            RiperMode::Plan => "PLAN",
            RiperMode::Execute => "EXECUTE",
            RiperMode::Review => "REVIEW",
        }
    }

    /// The exact command string required to enter this mode
    pub fn entry_command(&self) -> String {
        format!("ENTER {} MODE", self.as_str())
    }
}

impl std::fmt::Display for RiperMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Protocol state tracked per agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeState {
    /// Current protocol mode
    pub current_mode: RiperMode,
    /// Whether transitions require explicit commands
    pub mode_locked: bool,
    /// When the current mode was entered
    pub entry_time: DateTime<Utc>,
    /// Append-only observation log
    pub observations: Vec<String>,
    /// Compliance score, decremented per hedged observation
    pub compliance_score: f64,
    /// Number of hedged observations seen
    pub hallucination_count: u64,
}

impl Default for ModeState {
    fn default() -> Self {
        Self {
            current_mode: RiperMode::Research,
            mode_locked: true,
            entry_time: Utc::now(),
            observations: Vec::new(),
            compliance_score: 1.0,
            hallucination_count: 0,
        }
    }
}

impl ModeState {
    /// Create a fresh state in RESEARCH mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a transition is allowed without a command
    pub fn can_transition(&self) -> bool {
        !self.mode_locked
    }

    /// Check a transition command against the target mode
    pub fn is_valid_command(mode: RiperMode, command: &str) -> bool {
        command == mode.entry_command()
    }

    /// Enter a mode after the command has been validated
    pub fn enter(&mut self, mode: RiperMode) {
        self.current_mode = mode;
        self.entry_time = Utc::now();
        self.mode_locked = true;
    }

    /// Append a timestamped observation, penalizing hedged language
    pub fn add_observation(&mut self, observation: &str) {
        let stamped = format!("[{}] {}", Utc::now().to_rfc3339(), observation);
        self.observations.push(stamped);

        let lowered = observation.to_lowercase();
        if HEDGING_MARKERS.iter().any(|m| lowered.contains(m)) {
            self.hallucination_count += 1;
            self.compliance_score = (self.compliance_score - COMPLIANCE_DECREMENT).max(0.0);
        }
    }
}
