//! Swarm orchestration for PersonaSwarm
//!
//! Owns the agent pool, drives perspective collection and synthesis, and
//! records completed-task history and aggregate metrics.

pub mod error;
pub mod metrics;
pub mod swarm;
pub mod synthesis;

pub use error::{SwarmError, SwarmResult};
pub use metrics::SwarmMetrics;
pub use swarm::{SwarmConfig, SwarmOrchestrator, TaskResult};
pub use synthesis::{collect_perspectives, synthesize, SynthesisResult, FALLBACK_CONFIDENCE};
