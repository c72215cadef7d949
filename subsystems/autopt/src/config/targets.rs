//! Fixed reference performance targets.

/// Reference values used only for normalization and comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SotaTargets {
    /// Target cycle latency (ms)
    pub latency_ms: f64,
    /// Target accuracy (0.0 - 1.0)
    pub accuracy: f64,
    /// Target throughput (ops/s)
    pub throughput_ops_sec: f64,
    /// Target memory footprint (MB)
    pub memory_efficiency_mb: f64,
}

impl SotaTargets {
    /// Create targets
    pub const fn new(
        latency_ms: f64,
        accuracy: f64,
        throughput_ops_sec: f64,
        memory_efficiency_mb: f64,
    ) -> Self {
        Self {
            latency_ms,
            accuracy,
            throughput_ops_sec,
            memory_efficiency_mb,
        }
    }
}

impl Default for SotaTargets {
    fn default() -> Self {
        Self::new(15.12, 0.959, 80.16, 50.0)
    }
}
