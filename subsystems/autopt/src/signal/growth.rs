//! Growth transform.
//!
//! Scales a normalized impact by how much the engine has already learned:
//!
//! ```text
//! growth = clamp((ω·L + T) / E · I · impact, 0, max_growth)
//! ```
//!
//! `L` is the model buffer length, `T` the sum of trait `current` values,
//! `E` the experience buffer length (at least 1) and `I` the mean impact of
//! the last ten models (0.5 when there are none).

use crate::math;

/// Number of recent models averaged into `I`
pub const RECENT_MODEL_WINDOW: usize = 10;

/// Mean model impact assumed before any model exists
pub const DEFAULT_MODEL_IMPACT: f64 = 0.5;

/// Engine-state inputs to the growth transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthInputs {
    /// `L`
    pub model_count: usize,
    /// `T`
    pub trait_sum: f64,
    /// Raw experience buffer length; floored to 1 when used
    pub experience_count: usize,
    /// `I`
    pub recent_model_impact: f64,
}

impl GrowthInputs {
    /// Apply the transform to a normalized impact
    pub fn potential(&self, momentum: f64, experience_impact: f64, max_growth: f64) -> f64 {
        let experiences = self.experience_count.max(1) as f64;
        let raw = (momentum * self.model_count as f64 + self.trait_sum) / experiences
            * self.recent_model_impact
            * experience_impact;
        math::clamp_finite(raw, 0.0, max_growth)
    }
}
