//! # Optimization Engine
//!
//! The top-level cycle orchestrator. One call to [`Engine::run_cycle`]
//! drives the whole pipeline synchronously and returns one
//! [`OptimizationState`]; no component calls back into the engine.
//!
//! ## Concurrency
//!
//! `run_cycle` is the only mutator. The entire cycle body runs under a
//! single lock, so concurrent callers are serialized cycle by cycle and
//! cycle numbers stay strictly sequential.

mod builder;
mod model;
mod summary;

pub use builder::EngineBuilder;
pub use model::{complexity, predict, MAX_PARENTS};
pub use summary::{SummaryReport, SUMMARY_WINDOW};

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use autopt_types::{OptimizationMode, TraitKind};
use spin::Mutex;

use self::model::ModelSeed;
use crate::cognition::TraitState;
use crate::config::{EngineConfig, ModeProfile};
use crate::core::{Clock, EngineLogger, ResourceMonitor};
use crate::history::{BoundedBuffer, Experience, GeneratedModel, OptimizationState};
use crate::math;
use crate::mode::ModeController;
use crate::perf::PerformanceScorer;
use crate::reflect::ReflectiveInsight;
use crate::signal::{
    GrowthInputs, SignalImpactScorer, SignalReading, DEFAULT_MODEL_IMPACT, RECENT_MODEL_WINDOW,
};
use crate::stats;

// ============================================================================
// ENGINE
// ============================================================================

/// Autonomous optimization engine
pub struct Engine {
    core: Mutex<EngineCore>,
    retention: usize,
}

impl Engine {
    /// Engine with the default config and `retention` entries per buffer.
    ///
    /// A retention of 0 is raised to 1; use [`EngineBuilder`] to have it
    /// rejected instead.
    pub fn new(retention: usize) -> Self {
        EngineBuilder::new()
            .with_retention(retention.max(1))
            .assemble()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    fn from_core(core: EngineCore, retention: usize) -> Self {
        Self {
            core: Mutex::new(core),
            retention,
        }
    }

    /// Run one full cycle on `signal`. Never fails.
    pub fn run_cycle(&self, signal: &SignalReading, environment: &str) -> OptimizationState {
        self.core.lock().run_cycle(signal, environment)
    }

    /// Aggregate over the last ten cycles
    pub fn summary(&self) -> SummaryReport {
        let core = self.core.lock();
        SummaryReport::build(
            &core.history,
            core.traits,
            core.cycle_count,
            core.modes.mode(),
            core.modes.active_profile(),
            &core.config.sota,
        )
    }

    // ------------------------------------------------------------------------
    // Read-only snapshots
    // ------------------------------------------------------------------------

    pub fn traits(&self) -> TraitState {
        self.core.lock().traits
    }

    pub fn mode(&self) -> OptimizationMode {
        self.core.lock().modes.mode()
    }

    pub fn active_profile(&self) -> ModeProfile {
        self.core.lock().modes.active_profile()
    }

    /// Number of mode changes so far
    pub fn mode_transitions(&self) -> u64 {
        self.core.lock().modes.transitions()
    }

    pub fn cycle_count(&self) -> u64 {
        self.core.lock().cycle_count
    }

    /// Retained experiences, oldest first
    pub fn experiences(&self) -> Vec<Experience> {
        self.core.lock().experiences.snapshot()
    }

    /// Retained models, oldest first
    pub fn models(&self) -> Vec<GeneratedModel> {
        self.core.lock().models.snapshot()
    }

    /// Retained cycle results, oldest first
    pub fn history(&self) -> Vec<OptimizationState> {
        self.core.lock().history.snapshot()
    }

    /// Reflective analysis of the most recent cycle
    pub fn last_insight(&self) -> ReflectiveInsight {
        self.core.lock().last_insight
    }

    pub fn config(&self) -> EngineConfig {
        self.core.lock().config
    }

    pub fn retention_size(&self) -> usize {
        self.retention
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_RETENTION)
    }
}

impl core::fmt::Debug for Engine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let core = self.core.lock();
        f.debug_struct("Engine")
            .field("retention", &self.retention)
            .field("cycle_count", &core.cycle_count)
            .field("mode", &core.modes.mode())
            .field("traits", &core.traits)
            .finish()
    }
}

// ============================================================================
// ENGINE CORE
// ============================================================================

/// Mutable engine state; only ever touched under the engine lock
struct EngineCore {
    config: EngineConfig,
    impact: SignalImpactScorer,
    perf: PerformanceScorer,
    traits: TraitState,
    modes: ModeController,
    experiences: BoundedBuffer<Experience>,
    models: BoundedBuffer<GeneratedModel>,
    history: BoundedBuffer<OptimizationState>,
    cycle_count: u64,
    models_generated: u64,
    last_insight: ReflectiveInsight,
    clock: Box<dyn Clock>,
    monitor: Box<dyn ResourceMonitor>,
    logger: EngineLogger,
}

impl EngineCore {
    fn new(
        config: EngineConfig,
        retention: usize,
        clock: Box<dyn Clock>,
        monitor: Box<dyn ResourceMonitor>,
        logger: EngineLogger,
    ) -> Self {
        Self {
            impact: SignalImpactScorer::new(&config),
            perf: PerformanceScorer::new(&config),
            traits: TraitState::new(),
            modes: ModeController::new(config.modes),
            experiences: BoundedBuffer::new(retention),
            models: BoundedBuffer::new(retention),
            history: BoundedBuffer::new(retention),
            cycle_count: 0,
            models_generated: 0,
            last_insight: ReflectiveInsight::default(),
            config,
            clock,
            monitor,
            logger,
        }
    }

    fn run_cycle(&mut self, signal: &SignalReading, environment: &str) -> OptimizationState {
        self.cycle_count += 1;
        let cycle = self.cycle_count;
        let started = self.clock.monotonic_nanos();

        // Filter and score the reading against the pre-evolution traits
        let filtered = self.impact.filter(signal, &self.traits);
        let impact = self.impact.compute_impact(&filtered, &self.growth_inputs());

        let insight = ReflectiveInsight::analyze(&filtered, &self.history);
        self.logger.trace(format_args!(
            "Engine: cycle {} reflection mean={:.4} diversity={:.4} opportunity={:.1}",
            cycle, insight.signal_mean, insight.signal_diversity, insight.opportunity
        ));
        self.last_insight = insight;

        self.traits.evolve(impact, environment, &self.config);

        let model = self.generate_model(impact, environment);

        let elapsed = self.clock.monotonic_nanos().saturating_sub(started);
        let latency_ms = elapsed as f64 / 1_000_000.0;

        let score = self.perf.score(latency_ms, impact, &self.traits);
        let level = self.perf.classify_level(score);
        let accuracy = self.perf.estimate_accuracy(impact, &self.traits);

        let resources = self.monitor.sample();
        let timestamp = self.clock.now();

        self.experiences.push(Experience {
            cycle,
            channel_values: filtered.to_map(),
            environment: String::from(environment),
            impact,
            timestamp,
        });
        self.models.push(model);

        let state = OptimizationState {
            cycle_count: cycle,
            performance_score: score,
            latency_ms,
            accuracy,
            memory_usage_mb: math::max(math::finite_or(resources.memory_usage_mb, 0.0), 0.0),
            cpu_usage_percent: math::max(math::finite_or(resources.cpu_usage_percent, 0.0), 0.0),
            level,
            traits: self.traits,
            timestamp,
        };
        self.history.push(state.clone());

        let transition = self.modes.update(score, latency_ms);
        if transition.changed() {
            self.logger.info(format_args!(
                "Engine: mode {} -> {} (score {:.3}, latency {:.3}ms)",
                transition.from, transition.to, score, latency_ms
            ));
        }

        self.logger.debug(format_args!(
            "Engine: cycle {} impact={:.4} score={:.3} level={} focus={:.4}",
            cycle,
            impact,
            score,
            level,
            self.traits.get(TraitKind::Focus).current
        ));

        state
    }

    /// Engine-state inputs to the growth transform
    fn growth_inputs(&self) -> GrowthInputs {
        let recent_model_impact = if self.models.is_empty() {
            DEFAULT_MODEL_IMPACT
        } else {
            let impacts: Vec<f64> = self
                .models
                .recent(RECENT_MODEL_WINDOW)
                .map(|m| m.impact)
                .collect();
            stats::mean(&impacts)
        };

        GrowthInputs {
            model_count: self.models.len(),
            trait_sum: self.traits.current_sum(),
            experience_count: self.experiences.len(),
            recent_model_impact,
        }
    }

    fn generate_model(&mut self, impact: f64, environment: &str) -> GeneratedModel {
        self.models_generated += 1;
        let parent_ids = self
            .models
            .iter()
            .rev()
            .take(model::MAX_PARENTS)
            .map(|m| m.id)
            .collect();

        ModelSeed {
            generation: self.models_generated,
            traits: self.traits,
            impact,
            environment,
            mode: self.modes.mode(),
            parent_ids,
        }
        .build(&self.config.sota)
    }
}

// ============================================================================
// TESTS
// ============================================================================
