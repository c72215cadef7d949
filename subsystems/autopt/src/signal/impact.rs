//! Impact scoring.

use autopt_types::Band;

use super::filter::{AdaptiveFilter, FilteredSignal};
use super::growth::GrowthInputs;
use super::reading::SignalReading;
use crate::cognition::TraitState;
use crate::config::{ChannelWeights, EngineConfig};
use crate::math;

/// Floor on the weight denominator
const MIN_TOTAL_WEIGHT: f64 = 0.1;

/// Turns a reading into one bounded impact scalar.
///
/// Pure: depends only on the current trait state and its inputs.
#[derive(Debug, Clone, Copy)]
pub struct SignalImpactScorer {
    weights: ChannelWeights,
    momentum: f64,
    impact_floor: f64,
    max_growth: f64,
}

impl SignalImpactScorer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            weights: config.channel_weights,
            momentum: config.momentum,
            impact_floor: config.impact_floor,
            max_growth: config.max_growth,
        }
    }

    /// Adaptive filter for the current trait state
    pub fn filter(&self, reading: &SignalReading, traits: &TraitState) -> FilteredSignal {
        AdaptiveFilter::for_traits(traits).apply(reading)
    }

    /// Weighted mean over surviving bands, `None` if nothing survived.
    ///
    /// Missing bands contribute to neither the sum nor the denominator.
    pub fn normalized_impact(&self, filtered: &FilteredSignal) -> Option<f64> {
        if filtered.is_empty() {
            return None;
        }

        let (weighted, total) = filtered
            .iter()
            .fold((0.0, 0.0), |(weighted, total), (band, value)| {
                let w = self.weights.weight(band);
                (weighted + w * value, total + w)
            });

        // Overflow saturates instead of collapsing to zero
        Some(math::clamp_finite(
            weighted / math::max(total, MIN_TOTAL_WEIGHT),
            0.0,
            f64::MAX,
        ))
    }

    /// Final impact: the growth transform of the normalized impact, or the
    /// fixed floor when the filter left nothing
    pub fn compute_impact(&self, filtered: &FilteredSignal, growth: &GrowthInputs) -> f64 {
        match self.normalized_impact(filtered) {
            Some(normalized) => growth.potential(self.momentum, normalized, self.max_growth),
            None => self.impact_floor,
        }
    }

    /// Weight of a band
    pub fn weight(&self, band: Band) -> f64 {
        self.weights.weight(band)
    }
}
