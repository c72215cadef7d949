//! Read-only aggregation over recent cycles.

use alloc::vec::Vec;

use autopt_types::{OptimizationLevel, OptimizationMode, Trend};

use crate::cognition::TraitState;
use crate::config::{ModeProfile, SotaTargets};
use crate::history::{BoundedBuffer, OptimizationState};
use crate::math;
use crate::stats;

/// Number of most recent cycles summarized
pub const SUMMARY_WINDOW: usize = 10;

/// Latency floor used for the SOTA latency ratio (ms)
const MIN_MEAN_LATENCY_MS: f64 = 1e-3;

/// Aggregate view of the last [`SUMMARY_WINDOW`] cycles
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    /// Entries actually aggregated (≤ 10)
    pub cycles_analyzed: usize,
    /// Cycles run over the engine's lifetime
    pub total_cycles: u64,
    pub average_score: f64,
    pub best_score: f64,
    pub average_latency_ms: f64,
    /// Lowest latency in the window
    pub best_latency_ms: f64,
    pub average_accuracy: f64,
    /// Trait snapshot at summary time
    pub traits: TraitState,
    /// `target latency / mean latency`
    pub latency_ratio: f64,
    /// `mean accuracy / target accuracy`
    pub accuracy_ratio: f64,
    pub score_trend: Trend,
    /// Falling latency counts as improving
    pub latency_trend: Trend,
    /// Level of the average score
    pub level: OptimizationLevel,
    pub current_mode: OptimizationMode,
    pub active_profile: ModeProfile,
}

impl SummaryReport {
    pub(crate) fn build(
        history: &BoundedBuffer<OptimizationState>,
        traits: TraitState,
        total_cycles: u64,
        current_mode: OptimizationMode,
        active_profile: ModeProfile,
        sota: &SotaTargets,
    ) -> Self {
        let window: Vec<&OptimizationState> = history.recent(SUMMARY_WINDOW).collect();

        if window.is_empty() {
            return Self {
                cycles_analyzed: 0,
                total_cycles,
                average_score: 0.0,
                best_score: 0.0,
                average_latency_ms: 0.0,
                best_latency_ms: 0.0,
                average_accuracy: 0.0,
                traits,
                latency_ratio: 0.0,
                accuracy_ratio: 0.0,
                score_trend: Trend::Stable,
                latency_trend: Trend::Stable,
                level: OptimizationLevel::OptimizationNeeded,
                current_mode,
                active_profile,
            };
        }

        let scores: Vec<f64> = window.iter().map(|s| s.performance_score).collect();
        let latencies: Vec<f64> = window.iter().map(|s| s.latency_ms).collect();
        let accuracies: Vec<f64> = window.iter().map(|s| s.accuracy).collect();

        let average_score = stats::mean(&scores);
        let average_latency_ms = stats::mean(&latencies);
        let average_accuracy = stats::mean(&accuracies);

        let best_score = scores.iter().copied().fold(0.0, math::max);
        let best_latency_ms = latencies.iter().copied().fold(f64::INFINITY, math::min);

        Self {
            cycles_analyzed: window.len(),
            total_cycles,
            average_score,
            best_score,
            average_latency_ms,
            best_latency_ms: math::finite_or(best_latency_ms, 0.0),
            average_accuracy,
            traits,
            latency_ratio: math::finite_or(
                sota.latency_ms / math::max(average_latency_ms, MIN_MEAN_LATENCY_MS),
                0.0,
            ),
            accuracy_ratio: math::finite_or(average_accuracy / sota.accuracy, 0.0),
            score_trend: Trend::from_rising_slope(stats::slope(&scores)),
            latency_trend: Trend::from_falling_slope(stats::slope(&latencies)),
            level: OptimizationLevel::from_score(average_score),
            current_mode,
            active_profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModeWeights;
    use crate::core::Timestamp;

    fn state(cycle: u64, score: f64, latency_ms: f64, accuracy: f64) -> OptimizationState {
        OptimizationState {
            cycle_count: cycle,
            performance_score: score,
            latency_ms,
            accuracy,
            memory_usage_mb: 0.0,
            cpu_usage_percent: 0.0,
            level: OptimizationLevel::from_score(score),
            traits: TraitState::new(),
            timestamp: Timestamp::ZERO,
        }
    }

    fn build(history: &BoundedBuffer<OptimizationState>) -> SummaryReport {
        SummaryReport::build(
            history,
            TraitState::new(),
            history.len() as u64,
            OptimizationMode::Balanced,
            ModeWeights::default().balanced,
            &SotaTargets::default(),
        )
    }

    #[test]
    fn test_empty_history() {
        let report = build(&BoundedBuffer::new(10));
        assert_eq!(report.cycles_analyzed, 0);
        assert_eq!(report.average_score, 0.0);
        assert_eq!(report.score_trend, Trend::Stable);
        assert_eq!(report.latency_trend, Trend::Stable);
    }

    #[test]
    fn test_window_is_last_ten() {
        let mut history = BoundedBuffer::new(100);
        for i in 0..15 {
            // First five are outliers that must not be counted
            let score = if i < 5 { 0.0 } else { 0.8 };
            history.push(state(i + 1, score, 20.0, 0.9));
        }
        let report = build(&history);
        assert_eq!(report.cycles_analyzed, 10);
        assert_eq!(report.total_cycles, 15);
        assert!((report.average_score - 0.8).abs() < 1e-12);
        assert_eq!(report.score_trend, Trend::Stable);
        assert_eq!(report.level, OptimizationLevel::SotaCompetitive);
    }

    #[test]
    fn test_best_values_and_ratios() {
        let mut history = BoundedBuffer::new(100);
        history.push(state(1, 0.6, 30.0, 0.90));
        history.push(state(2, 0.9, 10.0, 0.92));
        history.push(state(3, 0.7, 20.0, 0.94));
        let report = build(&history);
        assert_eq!(report.best_score, 0.9);
        assert_eq!(report.best_latency_ms, 10.0);
        assert!((report.average_latency_ms - 20.0).abs() < 1e-12);
        assert!((report.latency_ratio - 15.12 / 20.0).abs() < 1e-12);
        assert!((report.accuracy_ratio - 0.92 / 0.959).abs() < 1e-9);
    }

    #[test]
    fn test_trends() {
        let mut history = BoundedBuffer::new(100);
        for i in 0..10 {
            history.push(state(i + 1, 0.1 + 0.05 * i as f64, 50.0 - 3.0 * i as f64, 0.9));
        }
        let report = build(&history);
        assert_eq!(report.score_trend, Trend::Improving);
        assert_eq!(report.latency_trend, Trend::Improving);

        let mut history = BoundedBuffer::new(100);
        for i in 0..10 {
            history.push(state(i + 1, 0.9 - 0.05 * i as f64, 5.0 + 3.0 * i as f64, 0.9));
        }
        let report = build(&history);
        assert_eq!(report.score_trend, Trend::Declining);
        assert_eq!(report.latency_trend, Trend::Declining);
    }

    #[test]
    fn test_zero_latency_ratio_is_finite() {
        let mut history = BoundedBuffer::new(10);
        history.push(state(1, 0.5, 0.0, 0.9));
        let report = build(&history);
        assert!(report.latency_ratio.is_finite());
    }
}
