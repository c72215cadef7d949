//! Adaptive threshold filter.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use autopt_types::{Band, TraitKind};

use super::reading::{ChannelValue, SignalReading};
use crate::cognition::TraitState;

// ============================================================================
// FILTERED SIGNAL
// ============================================================================

/// Band values that survived filtering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredSignal {
    values: BTreeMap<Band, f64>,
}

impl FilteredSignal {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, band: Band) -> Option<f64> {
        self.values.get(&band).copied()
    }

    /// Iterate in canonical band order
    pub fn iter(&self) -> impl Iterator<Item = (Band, f64)> + '_ {
        self.values.iter().map(|(b, v)| (*b, *v))
    }

    /// Surviving values in band order
    pub fn values(&self) -> Vec<f64> {
        self.values.values().copied().collect()
    }

    /// Owned band map
    pub fn to_map(&self) -> BTreeMap<Band, f64> {
        self.values.clone()
    }
}

impl FromIterator<(Band, f64)> for FilteredSignal {
    fn from_iter<I: IntoIterator<Item = (Band, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// ADAPTIVE FILTER
// ============================================================================

/// Drops channel values at or below a trait-dependent threshold
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveFilter {
    threshold: f64,
}

impl AdaptiveFilter {
    /// Threshold grows with adaptability and focus
    pub fn for_traits(traits: &TraitState) -> Self {
        let adaptability = traits.get(TraitKind::Adaptability).current;
        let focus = traits.get(TraitKind::Focus).current;
        Self {
            threshold: 0.4 + 0.3 * adaptability + 0.2 * focus,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[inline]
    fn passes(&self, value: f64) -> bool {
        value.is_finite() && value >= 0.0 && value > self.threshold
    }

    /// Apply to a reading. Unknown channels are skipped silently.
    pub fn apply(&self, reading: &SignalReading) -> FilteredSignal {
        reading
            .iter()
            .filter_map(|(name, value)| {
                let band = Band::from_name(name)?;
                let kept = match value {
                    ChannelValue::Scalar(v) => self.passes(*v).then_some(*v),
                    ChannelValue::Samples(samples) => {
                        // Running mean; a plain sum of large samples overflows
                        let (count, mean) = samples
                            .iter()
                            .copied()
                            .filter(|v| self.passes(*v))
                            .fold((0u64, 0.0), |(n, mean), v| {
                                let n = n + 1;
                                (n, mean + (v - mean) / n as f64)
                            });
                        (count > 0).then_some(mean)
                    },
                }?;
                Some((band, kept))
            })
            .collect()
    }
}
