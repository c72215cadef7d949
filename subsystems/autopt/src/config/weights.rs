//! Weight tables: per-channel, per-trait, per-environment and per-mode.

use alloc::string::String;

use autopt_types::{Band, OptimizationMode, TraitKind};

// ============================================================================
// CHANNEL WEIGHTS
// ============================================================================

/// Impact weight per recognized band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelWeights {
    pub delta: f64,
    pub theta: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl ChannelWeights {
    /// Weight of a band
    #[inline]
    pub fn weight(&self, band: Band) -> f64 {
        match band {
            Band::Delta => self.delta,
            Band::Theta => self.theta,
            Band::Alpha => self.alpha,
            Band::Beta => self.beta,
            Band::Gamma => self.gamma,
        }
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        Band::ALL.iter().map(|b| self.weight(*b)).sum()
    }
}

impl Default for ChannelWeights {
    fn default() -> Self {
        Self {
            delta: 0.15,
            theta: 0.20,
            alpha: 0.25,
            beta: 0.25,
            gamma: 0.15,
        }
    }
}

// ============================================================================
// TRAIT WEIGHTS
// ============================================================================

/// How strongly each trait responds to impact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraitWeights {
    pub focus: f64,
    pub resilience: f64,
    pub adaptability: f64,
}

impl TraitWeights {
    /// Weight of a trait
    #[inline]
    pub fn weight(&self, kind: TraitKind) -> f64 {
        match kind {
            TraitKind::Focus => self.focus,
            TraitKind::Resilience => self.resilience,
            TraitKind::Adaptability => self.adaptability,
        }
    }
}

impl Default for TraitWeights {
    fn default() -> Self {
        Self {
            focus: 0.6,
            resilience: 0.3,
            adaptability: 0.5,
        }
    }
}

// ============================================================================
// ENVIRONMENT FACTORS
// ============================================================================

/// Multiplier applied to trait deltas, keyed by environment label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentFactors {
    pub training: f64,
    pub testing: f64,
    pub production: f64,
    pub research: f64,
    /// Used when no key matches
    pub fallback: f64,
}

impl EnvironmentFactors {
    /// Resolve a free-form label by case-insensitive substring match.
    ///
    /// Keys are tried in the order training, testing, production, research;
    /// the first one contained in the label wins.
    pub fn resolve(&self, label: &str) -> f64 {
        let label: String = label.to_ascii_lowercase();
        [
            ("training", self.training),
            ("testing", self.testing),
            ("production", self.production),
            ("research", self.research),
        ]
        .into_iter()
        .find(|(key, _)| label.contains(key))
        .map(|(_, factor)| factor)
        .unwrap_or(self.fallback)
    }
}

impl Default for EnvironmentFactors {
    fn default() -> Self {
        Self {
            training: 1.2,
            testing: 1.0,
            production: 0.9,
            research: 1.1,
            fallback: 1.0,
        }
    }
}

// ============================================================================
// MODE PROFILES
// ============================================================================

/// Weighting profile reported while a mode is active
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeProfile {
    pub focus_weight: f64,
    pub latency_weight: f64,
}

impl ModeProfile {
    pub const fn new(focus_weight: f64, latency_weight: f64) -> Self {
        Self {
            focus_weight,
            latency_weight,
        }
    }
}

/// One profile per operating mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeWeights {
    pub performance: ModeProfile,
    pub efficiency: ModeProfile,
    pub balanced: ModeProfile,
    pub adaptive: ModeProfile,
}

impl ModeWeights {
    /// Profile for a mode
    #[inline]
    pub fn profile(&self, mode: OptimizationMode) -> ModeProfile {
        match mode {
            OptimizationMode::Performance => self.performance,
            OptimizationMode::Efficiency => self.efficiency,
            OptimizationMode::Balanced => self.balanced,
            OptimizationMode::Adaptive => self.adaptive,
        }
    }
}

impl Default for ModeWeights {
    fn default() -> Self {
        Self {
            performance: ModeProfile::new(0.8, 0.9),
            efficiency: ModeProfile::new(0.6, 0.7),
            balanced: ModeProfile::new(0.7, 0.5),
            adaptive: ModeProfile::new(0.75, 0.6),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_channel_weights_sum_to_one() {
        assert!((ChannelWeights::default().total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_environment_resolution() {
        let env = EnvironmentFactors::default();
        assert_eq!(env.resolve("training"), 1.2);
        assert_eq!(env.resolve("Model-TRAINING-run"), 1.2);
        assert_eq!(env.resolve("production"), 0.9);
        assert_eq!(env.resolve("deep research lab"), 1.1);
        assert_eq!(env.resolve("staging"), 1.0);
        assert_eq!(env.resolve(""), 1.0);
    }

    #[test]
    fn test_environment_first_key_wins() {
        let env = EnvironmentFactors::default();
        assert_eq!(env.resolve("production testing"), 1.0);
    }

    #[test]
    fn test_mode_profiles() {
        let weights = ModeWeights::default();
        assert_eq!(weights.profile(OptimizationMode::Performance).latency_weight, 0.9);
        assert_eq!(weights.profile(OptimizationMode::Balanced).focus_weight, 0.7);
    }
}
