//! # Reflective Analysis
//!
//! Per-cycle telemetry: summary statistics of the filtered signal and, once
//! enough history exists, the recent trend of score and latency. The
//! result is reported but does not feed back into the same cycle.

use autopt_types::Trend;

use crate::history::{BoundedBuffer, OptimizationState};
use crate::signal::FilteredSignal;
use crate::stats;

/// History entries needed before trends are fitted
pub const TREND_WINDOW: usize = 5;

/// Opportunity when score rises and latency falls
pub const OPPORTUNITY_IMPROVING: f64 = 0.8;
/// Opportunity for mixed or flat trends (and too little history)
pub const OPPORTUNITY_MIXED: f64 = 0.5;
/// Opportunity when score falls and latency rises
pub const OPPORTUNITY_DECLINING: f64 = 0.2;

/// Outcome of one reflective pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReflectiveInsight {
    /// Mean of surviving band values
    pub signal_mean: f64,
    /// Population standard deviation of surviving band values
    pub signal_diversity: f64,
    /// Least-squares slope of the last five scores
    pub score_slope: f64,
    /// Least-squares slope of the last five latencies
    pub latency_slope: f64,
    /// One of 0.2 / 0.5 / 0.8
    pub opportunity: f64,
}

impl ReflectiveInsight {
    /// Analyze the filtered signal against the current history
    pub fn analyze(filtered: &FilteredSignal, history: &BoundedBuffer<OptimizationState>) -> Self {
        let values = filtered.values();
        let signal_mean = stats::mean(&values);
        let signal_diversity = stats::std_dev(&values);

        if history.len() < TREND_WINDOW {
            return Self {
                signal_mean,
                signal_diversity,
                score_slope: 0.0,
                latency_slope: 0.0,
                opportunity: OPPORTUNITY_MIXED,
            };
        }

        let (scores, latencies): (alloc::vec::Vec<f64>, alloc::vec::Vec<f64>) = history
            .recent(TREND_WINDOW)
            .map(|s| (s.performance_score, s.latency_ms))
            .unzip();

        let score_slope = stats::slope(&scores);
        let latency_slope = stats::slope(&latencies);

        let opportunity = if score_slope > 0.0 && latency_slope < 0.0 {
            OPPORTUNITY_IMPROVING
        } else if score_slope < 0.0 && latency_slope > 0.0 {
            OPPORTUNITY_DECLINING
        } else {
            OPPORTUNITY_MIXED
        };

        Self {
            signal_mean,
            signal_diversity,
            score_slope,
            latency_slope,
            opportunity,
        }
    }

    /// Score trend with the summary dead-band applied
    pub fn score_trend(&self) -> Trend {
        Trend::from_rising_slope(self.score_slope)
    }
}

impl Default for ReflectiveInsight {
    fn default() -> Self {
        Self {
            signal_mean: 0.0,
            signal_diversity: 0.0,
            score_slope: 0.0,
            latency_slope: 0.0,
            opportunity: OPPORTUNITY_MIXED,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
