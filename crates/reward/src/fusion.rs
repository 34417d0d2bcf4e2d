//! Fusion pipeline reward: persona fitness combined with synthesis
//! throughput and audio quality baselines

use crate::error::{RewardError, RewardResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Multiplier applied when both fitness and throughput excel
const DUAL_EXCELLENCE_MULTIPLIER: f64 = 1.15;
/// Multiplier applied when exactly one of them excels
const SINGLE_EXCELLENCE_MULTIPLIER: f64 = 1.08;
/// Hard cap on the fused total reward
const FUSION_REWARD_CAP: f64 = 2.0;

/// Performance baselines fused rewards are measured against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionBaselines {
    /// Synthesis throughput baseline in episodes per hour
    pub throughput_eps_per_hour: f64,
    /// Persona fitness considered excellent
    pub fitness_target: f64,
    /// Mean opinion score target for synthesized audio
    pub mos_target: f64,
}

impl Default for FusionBaselines {
    fn default() -> Self {
        Self {
            throughput_eps_per_hour: 1_694_098.0,
            fitness_target: 0.95,
            mos_target: 4.1,
        }
    }
}

impl FusionBaselines {
    /// Validate the baselines
    pub fn validate(&self) -> RewardResult<()> {
        if self.throughput_eps_per_hour <= 0.0 {
            return Err(RewardError::InvalidBaseline {
                message: "throughput baseline must be positive".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.fitness_target) {
            return Err(RewardError::InvalidBaseline {
                message: "fitness target must be within [0, 1]".to_string(),
            });
        }
        if !(1.0..=5.0).contains(&self.mos_target) {
            return Err(RewardError::InvalidBaseline {
                message: "MOS target must be within [1, 5]".to_string(),
            });
        }
        Ok(())
    }
}

/// Measured outcome of one fused persona/audio episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionOutcome {
    /// Persona fitness of the produced content
    pub persona_fitness: f64,
    /// Estimated synthesis throughput in episodes per hour
    pub throughput_estimate: f64,
    /// GPU utilization during the episode (0.0 - 1.0)
    pub gpu_utilization: f64,
    /// Mean opinion score of the synthesized audio
    pub mos_score: f64,
}

/// Weighted fusion reward breakdown
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FusionRewardMetrics {
    /// Persona fitness against the target (weight 0.40)
    pub fitness_component: f64,
    /// Throughput against the baseline (weight 0.30)
    pub throughput_component: f64,
    /// Utilization distance from the 80% optimum (weight 0.20)
    pub efficiency_component: f64,
    /// MOS against the target (weight 0.10)
    pub mos_component: f64,
    /// Excellence multiplier actually applied
    pub excellence_multiplier: f64,
    /// Capped total reward
    pub total_reward: f64,
}

/// Scores fused persona/audio episodes against throughput and quality
/// baselines
#[derive(Debug, Clone)]
pub struct FusionRewardEngine {
    baselines: FusionBaselines,
}

impl FusionRewardEngine {
    /// Create an engine with validated baselines
    pub fn new(baselines: FusionBaselines) -> RewardResult<Self> {
        baselines.validate()?;
        Ok(Self { baselines })
    }

    /// The baselines in effect
    pub fn baselines(&self) -> &FusionBaselines {
        &self.baselines
    }

    /// Score one fused episode.
    ///
    /// Fitness and throughput ratios are left uncapped so outcomes beyond
    /// the baselines keep earning; the total is capped at 2.0. Meeting both
    /// the fitness target and the throughput baseline earns the dual
    /// excellence multiplier, meeting exactly one the single multiplier.
    pub fn calculate_reward(&self, outcome: &FusionOutcome) -> FusionRewardMetrics {
        let fitness_ratio = outcome.persona_fitness / self.baselines.fitness_target.max(0.01);
        let throughput_ratio =
            outcome.throughput_estimate / self.baselines.throughput_eps_per_hour;
        let efficiency = 1.0 - (0.8 - outcome.gpu_utilization).abs();
        let mos_ratio = outcome.mos_score / self.baselines.mos_target;

        let mut metrics = FusionRewardMetrics {
            fitness_component: fitness_ratio * 0.40,
            throughput_component: throughput_ratio * 0.30,
            efficiency_component: efficiency.max(0.0) * 0.20,
            mos_component: mos_ratio * 0.10,
            excellence_multiplier: 1.0,
            total_reward: 0.0,
        };

        let fitness_excellent = outcome.persona_fitness >= self.baselines.fitness_target;
        let throughput_excellent =
            outcome.throughput_estimate >= self.baselines.throughput_eps_per_hour;
        metrics.excellence_multiplier = match (fitness_excellent, throughput_excellent) {
            (true, true) => DUAL_EXCELLENCE_MULTIPLIER,
            (true, false) | (false, true) => SINGLE_EXCELLENCE_MULTIPLIER,
            (false, false) => 1.0,
        };

        let raw = metrics.fitness_component
            + metrics.throughput_component
            + metrics.efficiency_component
            + metrics.mos_component;
        metrics.total_reward = (raw * metrics.excellence_multiplier).min(FUSION_REWARD_CAP);
        debug!(
            total = metrics.total_reward,
            multiplier = metrics.excellence_multiplier,
            "fusion episode scored"
        );
        metrics
    }
}

impl Default for FusionRewardEngine {
    fn default() -> Self {
        Self {
            baselines: FusionBaselines::default(),
        }
    }
}
