//! Immutable per-cycle records.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use autopt_types::{Band, ModelId, OptimizationLevel, OptimizationMode};

use crate::cognition::TraitState;
use crate::core::Timestamp;

// ============================================================================
// EXPERIENCE
// ============================================================================

/// What the engine saw in one cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Experience {
    /// Cycle that produced it
    pub cycle: u64,
    /// Band values that survived the filter
    pub channel_values: BTreeMap<Band, f64>,
    /// Environment label as supplied
    pub environment: String,
    /// Final (growth-transformed) impact
    pub impact: f64,
    pub timestamp: Timestamp,
}

// ============================================================================
// GENERATED MODEL
// ============================================================================

/// Projected performance of a generated model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictedPerformance {
    pub latency_ms: f64,
    pub accuracy: f64,
    pub throughput: f64,
    pub confidence: f64,
}

/// Model derived from the trait snapshot of one cycle.
///
/// `parent_ids` are lineage back-references only, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedModel {
    pub id: ModelId,
    pub traits: TraitState,
    pub impact: f64,
    pub environment: String,
    pub complexity: f64,
    pub mode: OptimizationMode,
    pub predicted: PredictedPerformance,
    pub parent_ids: Vec<ModelId>,
    /// 1-based generation counter
    pub generation: u64,
}

// ============================================================================
// OPTIMIZATION STATE
// ============================================================================

/// Result of one cycle, also retained in the history buffer
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationState {
    pub cycle_count: u64,
    /// In `[0, 1]`
    pub performance_score: f64,
    pub latency_ms: f64,
    /// In `[0, 0.95]`
    pub accuracy: f64,
    pub memory_usage_mb: f64,
    pub cpu_usage_percent: f64,
    pub level: OptimizationLevel,
    pub traits: TraitState,
    pub timestamp: Timestamp,
}
