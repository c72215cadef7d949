//! Performance scorer.

use autopt_types::OptimizationLevel;

use crate::cognition::TraitState;
use crate::config::{EngineConfig, SotaTargets};
use crate::math;

/// Latency at which the latency component reaches zero (ms)
const LATENCY_CEILING_MS: f64 = 100.0;

/// Upper bound on estimated accuracy
pub const MAX_ACCURACY: f64 = 0.95;

// Component weights
const W_LATENCY: f64 = 0.3;
const W_IMPACT: f64 = 0.3;
const W_BALANCE: f64 = 0.2;
const W_SOTA: f64 = 0.2;

/// Scores a cycle against the fixed targets
#[derive(Debug, Clone, Copy)]
pub struct PerformanceScorer {
    sota: SotaTargets,
}

impl PerformanceScorer {
    pub fn new(config: &EngineConfig) -> Self {
        Self { sota: config.sota }
    }

    /// Score in `[0, 1]`.
    ///
    /// Negative or non-finite latency is treated as 0 ms, +∞ as "too slow to
    /// score"; impact is clamped to `[0, 1]` before weighting.
    pub fn score(&self, cycle_latency_ms: f64, impact: f64, traits: &TraitState) -> f64 {
        let latency = if cycle_latency_ms == f64::INFINITY {
            f64::MAX
        } else {
            math::clamp_finite(cycle_latency_ms, 0.0, f64::MAX)
        };

        let latency_score = math::max(0.0, 1.0 - latency / LATENCY_CEILING_MS);
        let impact_score = math::unit(impact);
        let trait_balance = math::unit(1.0 - traits.current_std_dev());
        let sota_score = math::min(1.0, self.sota.latency_ms / math::max(latency, 1.0));

        math::unit(
            W_LATENCY * latency_score
                + W_IMPACT * impact_score
                + W_BALANCE * trait_balance
                + W_SOTA * sota_score,
        )
    }

    /// Fixed-threshold classification
    #[inline]
    pub fn classify_level(&self, score: f64) -> OptimizationLevel {
        OptimizationLevel::from_score(score)
    }

    /// `min(0.95, 0.85 + 0.1·impact + 0.05·mean trait current)`
    pub fn estimate_accuracy(&self, impact: f64, traits: &TraitState) -> f64 {
        let impact = math::finite_or(impact, 0.0);
        math::clamp_finite(
            0.85 + 0.1 * impact + 0.05 * traits.mean_current(),
            0.0,
            MAX_ACCURACY,
        )
    }

    pub fn targets(&self) -> &SotaTargets {
        &self.sota
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cognition::TraitValue;

    fn scorer() -> PerformanceScorer {
        PerformanceScorer::new(&EngineConfig::default())
    }

    #[test]
    fn test_score_at_fast_latency_full_impact() {
        // latency 0 → latency 1.0, sota 1.0 (15.12 / 1), balance 1.0, impact 1.0
        let score = scorer().score(0.0, 1.0, &TraitState::new());
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_score_known_value() {
        // latency 50 → 0.5; impact 0.5; balance 1; sota 15.12/50
        let expected = 0.3 * 0.5 + 0.3 * 0.5 + 0.2 * 1.0 + 0.2 * (15.12 / 50.0);
        let score = scorer().score(50.0, 0.5, &TraitState::new());
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_score_range_over_grid() {
        let traits = TraitState::from_values(
            TraitValue::new(0.5, 0.0, 0.0),
            TraitValue::new(0.5, 1.0, 0.0),
            TraitValue::new(0.5, 0.3, 0.0),
        );
        let s = scorer();
        for latency in [0.0, 0.5, 1.0, 15.0, 99.0, 100.0, 250.0, 1e9] {
            for impact in [0.0, 0.1, 0.5, 1.0, 1.5, 2.0] {
                let score = s.score(latency, impact, &traits);
                assert!((0.0..=1.0).contains(&score), "{} {} -> {}", latency, impact, score);
            }
        }
    }

    #[test]
    fn test_score_non_finite_inputs() {
        let s = scorer();
        let traits = TraitState::new();
        for (latency, impact) in [
            (f64::NAN, 0.5),
            (f64::INFINITY, 0.5),
            (-10.0, 0.5),
            (10.0, f64::NAN),
            (10.0, f64::INFINITY),
        ] {
            let score = s.score(latency, impact, &traits);
            assert!(score.is_finite() && (0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_classify_level() {
        let s = scorer();
        assert_eq!(s.classify_level(0.95), OptimizationLevel::SotaChampion);
        assert_eq!(s.classify_level(0.65), OptimizationLevel::IndustryStandard);
        assert_eq!(s.classify_level(0.1), OptimizationLevel::OptimizationNeeded);
    }

    #[test]
    fn test_estimate_accuracy() {
        let s = scorer();
        let traits = TraitState::new();
        assert!((s.estimate_accuracy(0.1, &traits) - 0.885).abs() < 1e-12);
        assert_eq!(s.estimate_accuracy(2.0, &traits), MAX_ACCURACY);
        assert!((s.estimate_accuracy(f64::NAN, &traits) - 0.875).abs() < 1e-12);
    }
}
