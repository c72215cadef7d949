//! A single trait value.

use crate::math;

/// Baseline, current level and velocity of one trait.
///
/// `baseline` and `current` always lie in `[0, 1]`; `velocity` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraitValue {
    pub baseline: f64,
    pub current: f64,
    pub velocity: f64,
}

impl TraitValue {
    /// Value every trait starts from
    pub const INITIAL: Self = Self {
        baseline: 0.5,
        current: 0.5,
        velocity: 0.0,
    };

    /// Create a value, clamping the bounded fields
    pub fn new(baseline: f64, current: f64, velocity: f64) -> Self {
        Self {
            baseline: math::unit(baseline),
            current: math::unit(current),
            velocity: math::finite_or(velocity, 0.0),
        }
    }

    /// Apply one smoothing step for `delta`
    pub(crate) fn step(&mut self, delta: f64, momentum: f64, threshold: f64, nudge: f64) {
        self.velocity = math::finite_or(momentum * self.velocity + (1.0 - momentum) * delta, 0.0);
        self.current = math::unit(self.current + self.velocity);
        if math::abs(delta) > threshold {
            self.baseline = math::unit(self.baseline + nudge * delta);
        }
    }
}

impl Default for TraitValue {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        let v = TraitValue::new(1.4, -0.2, f64::NAN);
        assert_eq!(v.baseline, 1.0);
        assert_eq!(v.current, 0.0);
        assert_eq!(v.velocity, 0.0);
    }

    #[test]
    fn test_step_small_delta_leaves_baseline() {
        let mut v = TraitValue::INITIAL;
        v.step(0.01, 0.8, 0.05, 0.15);
        assert!((v.velocity - 0.002).abs() < 1e-12);
        assert!((v.current - 0.502).abs() < 1e-12);
        assert_eq!(v.baseline, 0.5);
    }

    #[test]
    fn test_step_large_delta_nudges_baseline() {
        let mut v = TraitValue::INITIAL;
        v.step(0.1, 0.8, 0.05, 0.15);
        assert!((v.baseline - 0.515).abs() < 1e-12);
    }

    #[test]
    fn test_step_saturates_at_one() {
        let mut v = TraitValue::new(0.99, 0.99, 5.0);
        v.step(1.0, 0.8, 0.05, 0.15);
        assert_eq!(v.current, 1.0);
        assert!(v.velocity > 1.0);
    }
}
