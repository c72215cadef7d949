//! Trait state and per-cycle evolution.

use autopt_types::TraitKind;

use super::value::TraitValue;
use crate::config::EngineConfig;
use crate::math;

/// The full set of traits, indexed by [`TraitKind`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraitState {
    values: [TraitValue; 3],
}

impl TraitState {
    /// All traits at `{0.5, 0.5, 0.0}`
    pub const fn new() -> Self {
        Self {
            values: [TraitValue::INITIAL; 3],
        }
    }

    /// Build from explicit values (bounded fields are clamped)
    pub fn from_values(focus: TraitValue, resilience: TraitValue, adaptability: TraitValue) -> Self {
        let mut state = Self::new();
        for (kind, v) in [
            (TraitKind::Focus, focus),
            (TraitKind::Resilience, resilience),
            (TraitKind::Adaptability, adaptability),
        ] {
            state.values[kind.index()] = TraitValue::new(v.baseline, v.current, v.velocity);
        }
        state
    }

    #[inline]
    pub fn get(&self, kind: TraitKind) -> TraitValue {
        self.values[kind.index()]
    }

    /// Iterate in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (TraitKind, TraitValue)> + '_ {
        TraitKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }

    /// Sum of `current` over all traits
    pub fn current_sum(&self) -> f64 {
        self.values.iter().map(|v| v.current).sum()
    }

    pub fn mean_current(&self) -> f64 {
        self.current_sum() / self.values.len() as f64
    }

    pub fn mean_velocity(&self) -> f64 {
        self.values.iter().map(|v| v.velocity).sum::<f64>() / self.values.len() as f64
    }

    /// Population standard deviation of `current`
    pub fn current_std_dev(&self) -> f64 {
        let currents = self.values.map(|v| v.current);
        crate::stats::std_dev(&currents)
    }

    /// Evolve every trait with the same impact and environment.
    ///
    /// There is no cross-trait coupling; each trait sees
    /// `delta = α · impact · weight · env_factor`.
    pub fn evolve(&mut self, impact: f64, environment: &str, config: &EngineConfig) {
        let impact = math::finite_or(impact, 0.0);
        let env_factor = config.environments.resolve(environment);

        for kind in TraitKind::ALL {
            let delta = config.adaptation_rate * impact * config.trait_weights.weight(kind) * env_factor;
            self.values[kind.index()].step(
                delta,
                config.momentum,
                config.evolution_threshold,
                config.baseline_nudge,
            );
        }
    }
}

impl Default for TraitState {
    fn default() -> Self {
        Self::new()
    }
}
