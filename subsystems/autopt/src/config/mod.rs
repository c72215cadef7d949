//! # Engine Configuration
//!
//! Immutable, strongly typed tuning constants. A config is validated once
//! when an engine is built and never changes afterwards.

mod targets;
mod weights;

pub use targets::SotaTargets;
pub use weights::{ChannelWeights, EnvironmentFactors, ModeProfile, ModeWeights, TraitWeights};

use alloc::format;

use crate::error::{EngineError, EngineResult};

/// Default buffer retention
pub const DEFAULT_RETENTION: usize = 1000;

// ============================================================================
// ENGINE CONFIG
// ============================================================================

/// Constant parameters for the engine's lifetime
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Momentum factor ω
    pub momentum: f64,
    /// Adaptation rate α
    pub adaptation_rate: f64,
    /// Trait-evolution threshold τ; deltas above it also move the baseline
    pub evolution_threshold: f64,
    /// Fraction of an over-threshold delta applied to the baseline
    pub baseline_nudge: f64,
    /// Impact reported when the filter leaves nothing
    pub impact_floor: f64,
    /// Upper bound of the growth transform
    pub max_growth: f64,
    /// Reference targets
    pub sota: SotaTargets,
    /// Per-band impact weights
    pub channel_weights: ChannelWeights,
    /// Per-trait response weights
    pub trait_weights: TraitWeights,
    /// Environment multipliers
    pub environments: EnvironmentFactors,
    /// Per-mode weighting profiles
    pub modes: ModeWeights,
}

impl EngineConfig {
    /// Validate every field
    pub fn validate(&self) -> EngineResult<()> {
        if !(0.0..1.0).contains(&self.momentum) {
            return Err(EngineError::invalid_config(
                "momentum",
                format!("{} not in [0, 1)", self.momentum),
            ));
        }
        if !(self.adaptation_rate > 0.0 && self.adaptation_rate <= 1.0) {
            return Err(EngineError::invalid_config(
                "adaptation_rate",
                format!("{} not in (0, 1]", self.adaptation_rate),
            ));
        }
        if !(self.evolution_threshold >= 0.0 && self.evolution_threshold.is_finite()) {
            return Err(EngineError::invalid_config(
                "evolution_threshold",
                "must be finite and non-negative",
            ));
        }
        if !(0.0..=1.0).contains(&self.baseline_nudge) {
            return Err(EngineError::invalid_config("baseline_nudge", "must be in [0, 1]"));
        }
        if !(self.impact_floor >= 0.0 && self.impact_floor <= self.max_growth) {
            return Err(EngineError::invalid_config(
                "impact_floor",
                "must be in [0, max_growth]",
            ));
        }
        if !(self.max_growth > 0.0 && self.max_growth.is_finite()) {
            return Err(EngineError::invalid_config("max_growth", "must be finite and positive"));
        }

        self.validate_targets()?;
        self.validate_weights()
    }

    fn validate_targets(&self) -> EngineResult<()> {
        let sota = &self.sota;
        for (field, value) in [
            ("sota.latency_ms", sota.latency_ms),
            ("sota.accuracy", sota.accuracy),
            ("sota.throughput_ops_sec", sota.throughput_ops_sec),
            ("sota.memory_efficiency_mb", sota.memory_efficiency_mb),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(EngineError::invalid_config(
                    field,
                    format!("{} must be finite and positive", value),
                ));
            }
        }
        Ok(())
    }

    fn validate_weights(&self) -> EngineResult<()> {
        let channels = &self.channel_weights;
        if autopt_types::Band::ALL
            .iter()
            .any(|b| !(channels.weight(*b) >= 0.0 && channels.weight(*b).is_finite()))
        {
            return Err(EngineError::invalid_config(
                "channel_weights",
                "weights must be finite and non-negative",
            ));
        }
        let total = channels.total();
        if (total - 1.0).abs() > 1e-6 {
            return Err(EngineError::invalid_config(
                "channel_weights",
                format!("weights sum to {}, expected 1.0", total),
            ));
        }

        let traits = &self.trait_weights;
        if autopt_types::TraitKind::ALL
            .iter()
            .any(|k| !traits.weight(*k).is_finite())
        {
            return Err(EngineError::invalid_config("trait_weights", "weights must be finite"));
        }

        let env = &self.environments;
        for value in [
            env.training,
            env.testing,
            env.production,
            env.research,
            env.fallback,
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(EngineError::invalid_config(
                    "environments",
                    "factors must be finite and non-negative",
                ));
            }
        }

        for mode in autopt_types::OptimizationMode::ALL {
            let profile = self.modes.profile(mode);
            if !(0.0..=1.0).contains(&profile.focus_weight)
                || !(0.0..=1.0).contains(&profile.latency_weight)
            {
                return Err(EngineError::invalid_config(
                    "modes",
                    format!("profile for {} must lie in [0, 1]", mode),
                ));
            }
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            momentum: 0.8,
            adaptation_rate: 0.1,
            evolution_threshold: 0.05,
            baseline_nudge: 0.15,
            impact_floor: 0.1,
            max_growth: 2.0,
            sota: SotaTargets::default(),
            channel_weights: ChannelWeights::default(),
            trait_weights: TraitWeights::default(),
            environments: EnvironmentFactors::default(),
            modes: ModeWeights::default(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_momentum_out_of_range() {
        let config = EngineConfig {
            momentum: 1.0,
            ..EngineConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field(), Some("momentum"));
    }

    #[test]
    fn test_rejects_nan_adaptation_rate() {
        let config = EngineConfig {
            adaptation_rate: f64::NAN,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate().unwrap_err().field(), Some("adaptation_rate"));
    }

    #[test]
    fn test_rejects_unbalanced_channel_weights() {
        let mut config = EngineConfig::default();
        config.channel_weights.gamma = 0.5;
        assert_eq!(config.validate().unwrap_err().field(), Some("channel_weights"));
    }

    #[test]
    fn test_rejects_zero_latency_target() {
        let mut config = EngineConfig::default();
        config.sota.latency_ms = 0.0;
        assert_eq!(config.validate().unwrap_err().field(), Some("sota.latency_ms"));
    }

    #[test]
    fn test_rejects_mode_profile_out_of_range() {
        let mut config = EngineConfig::default();
        config.modes.efficiency = ModeProfile::new(1.5, 0.2);
        assert_eq!(config.validate().unwrap_err().field(), Some("modes"));
    }
}
