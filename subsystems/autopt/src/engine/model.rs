//! Model generation from the post-evolution trait snapshot.

use alloc::string::String;
use alloc::vec::Vec;

use autopt_types::{ModelId, OptimizationMode, TraitKind};

use crate::cognition::TraitState;
use crate::config::SotaTargets;
use crate::history::{GeneratedModel, PredictedPerformance};
use crate::math;
use crate::perf::MAX_ACCURACY;

/// Lineage depth recorded on each model
pub const MAX_PARENTS: usize = 3;

/// `0.4·impact + 0.3·focus + 0.3·adaptability`
pub fn complexity(impact: f64, traits: &TraitState) -> f64 {
    let focus = traits.get(TraitKind::Focus).current;
    let adaptability = traits.get(TraitKind::Adaptability).current;
    math::finite_or(0.4 * impact + 0.3 * focus + 0.3 * adaptability, 0.0)
}

/// Project performance from the mean trait velocity.
///
/// A positive mean velocity shifts the projection toward lower latency and
/// higher throughput; the shift saturates at ±50%.
pub fn predict(traits: &TraitState, sota: &SotaTargets) -> PredictedPerformance {
    let shift = math::clamp_finite(10.0 * traits.mean_velocity(), -0.5, 0.5);

    PredictedPerformance {
        latency_ms: sota.latency_ms * (1.0 - shift),
        accuracy: math::clamp_finite(sota.accuracy * (1.0 + 0.1 * shift), 0.0, MAX_ACCURACY),
        throughput: sota.throughput_ops_sec * (1.0 + shift),
        confidence: math::unit(traits.mean_current() * (1.0 - math::abs(shift))),
    }
}

/// Everything needed to mint one model
pub(crate) struct ModelSeed<'a> {
    pub generation: u64,
    pub traits: TraitState,
    pub impact: f64,
    pub environment: &'a str,
    pub mode: OptimizationMode,
    pub parent_ids: Vec<ModelId>,
}

impl ModelSeed<'_> {
    pub(crate) fn build(self, sota: &SotaTargets) -> GeneratedModel {
        GeneratedModel {
            id: ModelId::new(self.generation),
            complexity: complexity(self.impact, &self.traits),
            predicted: predict(&self.traits, sota),
            traits: self.traits,
            impact: self.impact,
            environment: String::from(self.environment),
            mode: self.mode,
            parent_ids: self.parent_ids,
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cognition::TraitValue;

    #[test]
    fn test_complexity() {
        let traits = TraitState::new();
        assert!((complexity(1.0, &traits) - 0.7).abs() < 1e-12);
        assert_eq!(complexity(f64::NAN, &traits), 0.0);
    }

    #[test]
    fn test_prediction_at_rest_matches_targets() {
        let sota = SotaTargets::default();
        let p = predict(&TraitState::new(), &sota);
        assert!((p.latency_ms - sota.latency_ms).abs() < 1e-12);
        assert!((p.throughput - sota.throughput_ops_sec).abs() < 1e-12);
        assert!((p.accuracy - MAX_ACCURACY).abs() < 1e-12);
        assert!((p.confidence - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_prediction_shift_saturates() {
        let sota = SotaTargets::default();
        let fast = TraitValue::new(0.5, 0.5, 1.0);
        let traits = TraitState::from_values(fast, fast, fast);
        let p = predict(&traits, &sota);
        assert!((p.latency_ms - sota.latency_ms * 0.5).abs() < 1e-12);
        assert!((p.throughput - sota.throughput_ops_sec * 1.5).abs() < 1e-12);
        assert!((p.confidence - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_seed_builds_model() {
        let model = ModelSeed {
            generation: 7,
            traits: TraitState::new(),
            impact: 0.4,
            environment: "testing",
            mode: OptimizationMode::Balanced,
            parent_ids: alloc::vec![ModelId::new(6), ModelId::new(5)],
        }
        .build(&SotaTargets::default());
        assert_eq!(model.id, ModelId::new(7));
        assert_eq!(model.generation, 7);
        assert_eq!(model.parent_ids.len(), 2);
        assert_eq!(model.environment, "testing");
    }
}
