//! Five-factor episode reward engine with per-agent ledgers and policy
//! feedback

use crate::metrics::RewardMetrics;
use crate::sampler::{UniformGpuSampler, UtilizationSampler};
use chrono::{DateTime, Utc};
use personaswarm_agent_core::{AgentId, Task};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// Default expected quality when a task sets none
const DEFAULT_EXPECTED_QUALITY: f64 = 0.7;
/// Default target completion time in seconds
const DEFAULT_TARGET_TIME: f64 = 5.0;
/// Default optimal agent count
const DEFAULT_OPTIMAL_AGENTS: usize = 3;
/// Utilization considered optimal for the efficiency factor
const OPTIMAL_UTILIZATION: f64 = 0.8;
/// Total rewards above this earn the 10% excellence bonus
const EXCELLENCE_THRESHOLD: f64 = 0.9;

/// What the swarm produced for one episode
#[derive(Debug, Clone)]
pub struct EpisodeOutcome {
    /// Synthesis confidence of the swarm result
    pub confidence: f64,
    /// Agents that contributed perspectives
    pub participating_agents: Vec<AgentId>,
    /// Wall-clock completion time in seconds
    pub completion_time: f64,
}

/// One recorded episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// When the episode was recorded
    pub timestamp: DateTime<Utc>,
    /// Task the episode answered
    pub task_id: String,
    /// Reward breakdown
    pub metrics: RewardMetrics,
    /// Agents credited for the episode
    pub participating_agents: Vec<AgentId>,
}

/// Aggregate reward state across all episodes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalRewardState {
    /// Sum of all episode rewards
    pub total_rewards: f64,
    /// Episodes with total reward above 0.6
    pub successful_episodes: u64,
    /// Episodes at or below 0.6
    pub failed_episodes: u64,
    /// Mean reward across all episodes
    pub average_reward: f64,
}

/// Per-agent reward ledger
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentRewardLedger {
    /// Sum of individual rewards credited
    pub total_rewards: f64,
    /// Episodes this agent was credited for
    pub episode_count: u64,
    /// Running mean individual reward
    pub average_reward: f64,
    /// Best single individual reward
    pub best_reward: f64,
    /// Accrued specialization bonus, capped at 0.2
    pub specialization_bonus: f64,
}

/// Policy recommendation derived from an agent's ledger
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PolicyUpdate {
    /// Recommended exploration rate
    pub exploration_rate: f64,
    /// Recommended collaboration tendency
    pub collaboration_tendency: f64,
    /// Recommended confidence threshold
    pub confidence_threshold: f64,
}

impl Default for PolicyUpdate {
    fn default() -> Self {
        Self {
            exploration_rate: 0.3,
            collaboration_tendency: 0.5,
            confidence_threshold: 0.6,
        }
    }
}

/// Scores episodes, maintains per-agent ledgers, and derives policy updates
pub struct RewardEngine {
    sampler: Box<dyn UtilizationSampler>,
    history: Vec<EpisodeRecord>,
    agent_performance: HashMap<AgentId, AgentRewardLedger>,
    global: GlobalRewardState,
}

impl RewardEngine {
    /// Create an engine with the default uniform utilization sampler
    pub fn new() -> Self {
        Self::with_sampler(Box::new(UniformGpuSampler::default()))
    }

    /// Create an engine with a seeded utilization sampler
    pub fn seeded(seed: u64) -> Self {
        Self::with_sampler(Box::new(UniformGpuSampler::new(Some(seed))))
    }

    /// Create an engine with an explicit utilization sampler
    pub fn with_sampler(sampler: Box<dyn UtilizationSampler>) -> Self {
        Self {
            sampler,
            history: Vec::new(),
            agent_performance: HashMap::new(),
            global: GlobalRewardState::default(),
        }
    }

    /// Score one episode across the five weighted factors.
    ///
    /// Each factor is normalized into [0, 1] before weighting; totals above
    /// 0.9 earn a 10% excellence bonus.
    pub fn calculate_reward(&mut self, outcome: &EpisodeOutcome, task: &Task) -> RewardMetrics {
        let mut metrics = RewardMetrics::default();

        let expected = task.expected_quality.unwrap_or(DEFAULT_EXPECTED_QUALITY);
        let coverage_ratio = (outcome.confidence / expected.max(0.01)).min(1.0);
        metrics.coverage_success = coverage_ratio * 0.30;

        let optimal = task.optimal_agent_count.unwrap_or(DEFAULT_OPTIMAL_AGENTS).max(1);
        let collaboration_ratio =
            (outcome.participating_agents.len() as f64 / optimal as f64).min(1.0);
        metrics.collaboration_quality = collaboration_ratio * 0.25;

        let target_time = task.target_completion_time.unwrap_or(DEFAULT_TARGET_TIME);
        let speed_ratio = (target_time / outcome.completion_time.max(0.1)).clamp(0.1, 1.0);
        metrics.task_completion_speed = speed_ratio * 0.20;

        let utilization = self.sampler.sample();
        let efficiency = 1.0 - (OPTIMAL_UTILIZATION - utilization).abs();
        metrics.resource_efficiency = efficiency * 0.15;

        let quality = if outcome.confidence > 0.8 {
            1.0
        } else {
            outcome.confidence
        };
        metrics.output_quality = quality * 0.10;

        metrics.total_reward = metrics.coverage_success
            + metrics.collaboration_quality
            + metrics.task_completion_speed
            + metrics.resource_efficiency
            + metrics.output_quality;
        if metrics.total_reward > EXCELLENCE_THRESHOLD {
            metrics.total_reward *= 1.1;
        }
        metrics
    }

    /// Score an episode and fold it into global state, agent ledgers, and
    /// history
    pub fn record_episode(&mut self, outcome: &EpisodeOutcome, task: &Task) -> RewardMetrics {
        let metrics = self.calculate_reward(outcome, task);

        self.global.total_rewards += metrics.total_reward;
        if metrics.is_success() {
            self.global.successful_episodes += 1;
        } else {
            self.global.failed_episodes += 1;
        }
        let episodes = self.global.successful_episodes + self.global.failed_episodes;
        self.global.average_reward = self.global.total_rewards / episodes.max(1) as f64;

        self.update_agent_rewards(&outcome.participating_agents, &metrics);

        self.history.push(EpisodeRecord {
            timestamp: Utc::now(),
            task_id: task.id.to_string(),
            metrics,
            participating_agents: outcome.participating_agents.clone(),
        });
        info!(
            task = %task.id,
            reward = format!("{:.3}", metrics.total_reward),
            "episode recorded"
        );
        metrics
    }

    /// Credit participating agents with an even split of the episode reward
    pub fn update_agent_rewards(&mut self, agent_ids: &[AgentId], metrics: &RewardMetrics) {
        let individual = metrics.total_reward / agent_ids.len().max(1) as f64;
        for agent_id in agent_ids {
            let ledger = self.agent_performance.entry(agent_id.clone()).or_default();
            ledger.total_rewards += individual;
            ledger.episode_count += 1;
            ledger.average_reward = ledger.total_rewards / ledger.episode_count.max(1) as f64;
            if individual > ledger.best_reward {
                ledger.best_reward = individual;
            }
            // Consistent high performers accrue a capped specialization bonus.
            if ledger.average_reward > 0.8 {
                ledger.specialization_bonus = (ledger.specialization_bonus + 0.01).min(0.2);
            }
        }
    }

    /// Derive a policy recommendation from an agent's ledger.
    ///
    /// High performers explore less and collaborate more; unknown agents get
    /// the neutral defaults.
    pub fn policy_update(&self, agent_id: &AgentId) -> PolicyUpdate {
        let Some(ledger) = self.agent_performance.get(agent_id) else {
            return PolicyUpdate::default();
        };

        let exploration_rate = if ledger.average_reward > 0.7 {
            (0.3 - (ledger.average_reward - 0.7)).max(0.1)
        } else {
            (0.3 + (0.7 - ledger.average_reward)).min(0.5)
        };
        PolicyUpdate {
            exploration_rate,
            collaboration_tendency: (0.5 + ledger.specialization_bonus).min(0.9),
            confidence_threshold: 0.6 + ledger.average_reward * 0.2,
        }
    }

    /// Ledger for one agent, if any episodes credited it
    pub fn agent_ledger(&self, agent_id: &AgentId) -> Option<&AgentRewardLedger> {
        self.agent_performance.get(agent_id)
    }

    /// Aggregate reward state
    pub fn global_state(&self) -> &GlobalRewardState {
        &self.global
    }

    /// Recorded episode history, oldest first
    pub fn history(&self) -> &[EpisodeRecord] {
        &self.history
    }
}

impl Default for RewardEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::FixedSampler;
    use personaswarm_agent_core::{TaskId, TaskKind};

    fn reference_task() -> Task {
        Task::new(TaskId::new("test_task"), TaskKind::General, "evidence")
            .with_expected_quality(0.8)
            .with_target_time(5.0)
    }

    fn reference_outcome() -> EpisodeOutcome {
        EpisodeOutcome {
            confidence: 0.85,
            participating_agents: vec![
                AgentId::new("agent_1"),
                AgentId::new("agent_2"),
                AgentId::new("agent_3"),
            ],
            completion_time: 4.2,
        }
    }

    #[test]
    fn test_reference_episode_earns_excellence_bonus() {
        let mut engine = RewardEngine::with_sampler(Box::new(FixedSampler(0.8)));
        let metrics = engine.calculate_reward(&reference_outcome(), &reference_task());

        // 0.85/0.8 caps coverage at 1.0; 3-of-3 agents; 5.0/4.2 caps speed;
        // utilization sits exactly on the optimum; confidence above 0.8
        // short-circuits quality. Raw total 1.0, then the 10% bonus.
        assert!((metrics.coverage_success - 0.30).abs() < 1e-9);
        assert!((metrics.collaboration_quality - 0.25).abs() < 1e-9);
        assert!((metrics.task_completion_speed - 0.20).abs() < 1e-9);
        assert!((metrics.resource_efficiency - 0.15).abs() < 1e-9);
        assert!((metrics.output_quality - 0.10).abs() < 1e-9);
        assert!((metrics.total_reward - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_slow_low_confidence_episode_scores_low() {
        let mut engine = RewardEngine::with_sampler(Box::new(FixedSampler(0.8)));
        let outcome = EpisodeOutcome {
            confidence: 0.2,
            participating_agents: vec![AgentId::new("agent_1")],
            completion_time: 50.0,
        };
        let metrics = engine.calculate_reward(&outcome, &reference_task());

        // Speed ratio floors at 0.1; quality uses raw confidence.
        assert!((metrics.task_completion_speed - 0.02).abs() < 1e-9);
        assert!((metrics.output_quality - 0.02).abs() < 1e-9);
        assert!(metrics.total_reward < 0.6);
        assert!(!metrics.is_success());
    }

    #[test]
    fn test_record_episode_updates_global_state() {
        let mut engine = RewardEngine::with_sampler(Box::new(FixedSampler(0.8)));
        let metrics = engine.record_episode(&reference_outcome(), &reference_task());

        let global = engine.global_state();
        assert_eq!(global.successful_episodes, 1);
        assert_eq!(global.failed_episodes, 0);
        assert!((global.average_reward - metrics.total_reward).abs() < 1e-9);
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.history()[0].task_id, "test_task");
    }

    #[test]
    fn test_even_split_across_participants() {
        let mut engine = RewardEngine::with_sampler(Box::new(FixedSampler(0.8)));
        engine.record_episode(&reference_outcome(), &reference_task());

        let ledger = engine.agent_ledger(&AgentId::new("agent_2")).unwrap();
        assert_eq!(ledger.episode_count, 1);
        assert!((ledger.total_rewards - 1.1 / 3.0).abs() < 1e-9);
        assert_eq!(ledger.best_reward, ledger.total_rewards);
    }

    #[test]
    fn test_specialization_bonus_accrues_and_caps() {
        let mut engine = RewardEngine::with_sampler(Box::new(FixedSampler(0.8)));
        let outcome = EpisodeOutcome {
            confidence: 0.9,
            participating_agents: vec![AgentId::new("solo")],
            completion_time: 1.0,
        };
        for _ in 0..30 {
            engine.record_episode(&outcome, &reference_task());
        }
        let ledger = engine.agent_ledger(&AgentId::new("solo")).unwrap();
        assert!(ledger.average_reward > 0.8);
        assert!((ledger.specialization_bonus - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_policy_update_for_unknown_agent_is_neutral() {
        let engine = RewardEngine::with_sampler(Box::new(FixedSampler(0.8)));
        let policy = engine.policy_update(&AgentId::new("nobody"));
        assert_eq!(policy.exploration_rate, 0.3);
        assert_eq!(policy.collaboration_tendency, 0.5);
        assert_eq!(policy.confidence_threshold, 0.6);
    }

    #[test]
    fn test_high_performers_explore_less() {
        let mut engine = RewardEngine::with_sampler(Box::new(FixedSampler(0.8)));
        let outcome = EpisodeOutcome {
            confidence: 0.9,
            participating_agents: vec![AgentId::new("star")],
            completion_time: 1.0,
        };
        engine.record_episode(&outcome, &reference_task());

        let ledger = engine.agent_ledger(&AgentId::new("star")).unwrap();
        let policy = engine.policy_update(&AgentId::new("star"));
        assert!(ledger.average_reward > 0.7);
        assert!(policy.exploration_rate < 0.3);
        assert!(policy.exploration_rate >= 0.1);
        assert!(policy.confidence_threshold > 0.7);
    }
}
