//! Mode controller.

use autopt_types::OptimizationMode;

use crate::config::{ModeProfile, ModeWeights};

// Transition thresholds
const EFFICIENCY_MAX_SCORE: f64 = 0.6;
const EFFICIENCY_MIN_LATENCY_MS: f64 = 50.0;
const PERFORMANCE_MIN_SCORE: f64 = 0.85;
const PERFORMANCE_MAX_LATENCY_MS: f64 = 20.0;
const ADAPTIVE_MIN_SCORE: f64 = 0.9;

/// Outcome of one controller update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTransition {
    pub from: OptimizationMode,
    pub to: OptimizationMode,
}

impl ModeTransition {
    #[inline]
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Holds the active mode and its weighting profile
#[derive(Debug, Clone)]
pub struct ModeController {
    mode: OptimizationMode,
    weights: ModeWeights,
    transitions: u64,
}

impl ModeController {
    /// Start in [`OptimizationMode::Adaptive`]
    pub fn new(weights: ModeWeights) -> Self {
        Self {
            mode: OptimizationMode::Adaptive,
            weights,
            transitions: 0,
        }
    }

    /// Mode selected for `(score, latency_ms)`, independent of history
    pub fn select(score: f64, latency_ms: f64) -> OptimizationMode {
        if score < EFFICIENCY_MAX_SCORE && latency_ms > EFFICIENCY_MIN_LATENCY_MS {
            OptimizationMode::Efficiency
        } else if score > PERFORMANCE_MIN_SCORE && latency_ms < PERFORMANCE_MAX_LATENCY_MS {
            OptimizationMode::Performance
        } else if score > ADAPTIVE_MIN_SCORE {
            OptimizationMode::Adaptive
        } else {
            OptimizationMode::Balanced
        }
    }

    /// Move to the mode selected for this cycle
    pub fn update(&mut self, score: f64, latency_ms: f64) -> ModeTransition {
        let transition = ModeTransition {
            from: self.mode,
            to: Self::select(score, latency_ms),
        };
        if transition.changed() {
            self.transitions += 1;
        }
        self.mode = transition.to;
        transition
    }

    #[inline(always)]
    pub fn mode(&self) -> OptimizationMode {
        self.mode
    }

    /// Profile of the active mode
    pub fn active_profile(&self) -> ModeProfile {
        self.weights.profile(self.mode)
    }

    /// Number of mode changes so far
    pub fn transitions(&self) -> u64 {
        self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode() {
        let controller = ModeController::new(ModeWeights::default());
        assert_eq!(controller.mode(), OptimizationMode::Adaptive);
        assert_eq!(controller.active_profile(), ModeWeights::default().adaptive);
    }

    #[test]
    fn test_select_table() {
        assert_eq!(ModeController::select(0.5, 60.0), OptimizationMode::Efficiency);
        assert_eq!(ModeController::select(0.5, 50.0), OptimizationMode::Balanced);
        assert_eq!(ModeController::select(0.88, 10.0), OptimizationMode::Performance);
        assert_eq!(ModeController::select(0.95, 10.0), OptimizationMode::Performance);
        assert_eq!(ModeController::select(0.95, 30.0), OptimizationMode::Adaptive);
        assert_eq!(ModeController::select(0.88, 30.0), OptimizationMode::Balanced);
        assert_eq!(ModeController::select(0.7, 5.0), OptimizationMode::Balanced);
    }

    #[test]
    fn test_no_hysteresis() {
        let mut a = ModeController::new(ModeWeights::default());
        let mut b = ModeController::new(ModeWeights::default());
        a.update(0.5, 80.0);
        b.update(0.95, 5.0);
        assert_ne!(a.mode(), b.mode());

        let ta = a.update(0.7, 25.0);
        let tb = b.update(0.7, 25.0);
        assert_eq!(ta.to, tb.to);
        assert_eq!(a.mode(), OptimizationMode::Balanced);
    }

    #[test]
    fn test_oscillation_counts_transitions() {
        let mut controller = ModeController::new(ModeWeights::default());
        for i in 0..10 {
            let score = if i % 2 == 0 { 0.86 } else { 0.84 };
            controller.update(score, 10.0);
        }
        // Adaptive → Performance, then alternating with Balanced
        assert_eq!(controller.transitions(), 10);
    }
}
