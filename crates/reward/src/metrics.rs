//! Episode reward metric breakdown

use serde::{Deserialize, Serialize};

/// Weighted reward components of one episode; each field already carries
/// its factor weight
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RewardMetrics {
    /// Confidence against expected quality (weight 0.30)
    pub coverage_success: f64,
    /// Participation against the optimal agent count (weight 0.25)
    pub collaboration_quality: f64,
    /// Completion time against the target (weight 0.20)
    pub task_completion_speed: f64,
    /// Utilization distance from the 80% optimum (weight 0.15)
    pub resource_efficiency: f64,
    /// Synthesis confidence quality (weight 0.10)
    pub output_quality: f64,
    /// Sum of all components, with the excellence bonus applied
    pub total_reward: f64,
}

impl RewardMetrics {
    /// Whether this episode counts as successful (total above 0.6)
    pub fn is_success(&self) -> bool {
        self.total_reward > 0.6
    }
}
