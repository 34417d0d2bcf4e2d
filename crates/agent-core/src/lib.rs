//! Core agent infrastructure for the PersonaSwarm collaboration engine
//!
//! This crate provides the foundational components for swarm agents:
//! - Agent lifecycle, capability matching, and perspective generation
//! - RIPER mode protocol (locked mode register with explicit transitions)
//! - Task and perspective data model
//! - Persona trait profiles and the persona fitness scorer

#![warn(missing_docs)]

pub mod agent;
pub mod error;
pub mod mode;
pub mod persona;
pub mod profile;
pub mod task;

pub use agent::{Agent, AgentBehavior, AgentId, PerformanceLedger};
pub use error::{AgentError, AgentResult};
pub use mode::{ModeState, RiperMode};
pub use persona::{PersonaFitnessConfig, DEFAULT_FITNESS_FLOOR};
pub use profile::{StylisticMarkers, TraitProfile};
pub use task::{Difficulty, Perspective, Task, TaskId, TaskKind};

/// Re-export common types
pub mod prelude {
    pub use crate::{
        Agent, AgentBehavior, AgentError, AgentId, AgentResult, Difficulty, ModeState,
        PerformanceLedger, Perspective, RiperMode, StylisticMarkers, Task, TaskId, TaskKind,
        TraitProfile,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_exports() {
        let _mode = RiperMode::Research;
        let _state = ModeState::default();
        let _profile = TraitProfile::base();
        let _kind = TaskKind::default();
        let _ledger = PerformanceLedger::default();
    }
}
