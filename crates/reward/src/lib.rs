//! Multi-factor reward scoring for PersonaSwarm episodes
//!
//! Two engines live here: the base [`RewardEngine`] scoring swarm episodes
//! across five weighted factors, and the [`FusionRewardEngine`] scoring
//! combined persona/audio pipelines against throughput and quality
//! baselines. Both feed per-agent reward ledgers and policy updates.

pub mod engine;
pub mod error;
pub mod fusion;
pub mod metrics;
pub mod sampler;

pub use engine::{
    AgentRewardLedger, EpisodeOutcome, EpisodeRecord, GlobalRewardState, PolicyUpdate,
    RewardEngine,
};
pub use error::{RewardError, RewardResult};
pub use fusion::{FusionBaselines, FusionOutcome, FusionRewardEngine, FusionRewardMetrics};
pub use metrics::RewardMetrics;
pub use sampler::{FixedSampler, UniformGpuSampler, UtilizationSampler};
