//! GPU telemetry collaborator contract

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One telemetry sample; zeros when no device is available
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TelemetrySample {
    /// GPU utilization (0.0 - 1.0)
    pub utilization: f64,
    /// Device temperature in degrees C
    pub temperature: f64,
    /// Memory used in MB
    pub memory_used_mb: u64,
    /// Whether a live device produced this sample
    pub available: bool,
}

/// Opaque telemetry sampling collaborator
#[async_trait]
pub trait GpuTelemetry: Send + Sync {
    /// Take one utilization/temperature/memory sample
    async fn sample(&self) -> TelemetrySample;
}

/// Telemetry stub returning zeros; used when no device is present
#[derive(Debug, Clone, Default)]
pub struct NullTelemetry;

#[async_trait]
impl GpuTelemetry for NullTelemetry {
    async fn sample(&self) -> TelemetrySample {
        TelemetrySample::default()
    }
}

/// Fixed-sample telemetry; test seam for device-dependent paths
#[derive(Debug, Clone)]
pub struct FixedTelemetry(pub TelemetrySample);

#[async_trait]
impl GpuTelemetry for FixedTelemetry {
    async fn sample(&self) -> TelemetrySample {
        self.0
    }
}
