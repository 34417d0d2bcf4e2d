//! Aggregate swarm metrics

use serde::{Deserialize, Serialize};

/// Running aggregate metrics for one orchestrator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwarmMetrics {
    /// Tasks processed
    pub total_tasks: u64,
    /// Tasks whose merged confidence exceeded 0.5
    pub successful_collaborations: u64,
    /// Mode violations across the pool
    pub mode_violations: u64,
    /// Running mean of task completion time in seconds
    pub avg_task_completion_time: f64,
    /// Fan-out perspective collection rounds
    pub parallel_processing_events: u64,
    /// Last sampled GPU utilization (0.0 - 1.0)
    pub gpu_utilization: f64,
}

impl SwarmMetrics {
    /// Fold one completion-time sample into the running mean
    pub fn record_completion(&mut self, seconds: f64) {
        self.total_tasks += 1;
        let n = self.total_tasks as f64;
        self.avg_task_completion_time =
            (self.avg_task_completion_time * (n - 1.0) + seconds) / n;
    }
}
