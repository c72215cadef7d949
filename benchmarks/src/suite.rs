//! Suite execution and reporting

use alloc::string::String;

use autopt::{Engine, OptimizationState, SummaryReport};
use autopt_types::OptimizationLevel;

use crate::generator::SignalGenerator;

// ============================================================================
// SUITE CONFIG
// ============================================================================

/// What to run
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Number of sequential cycles
    pub cycles: u64,
    /// Environment label passed to every cycle
    pub environment: String,
    /// Generator seed
    pub seed: u64,
    /// 0 for scalar channels, otherwise samples per channel
    pub samples_per_channel: usize,
    /// Pause between consecutive cycles (ns), 0 for back-to-back
    pub delay_ns: u64,
}

impl SuiteConfig {
    pub fn new(cycles: u64, environment: impl Into<String>) -> Self {
        Self {
            cycles,
            environment: environment.into(),
            seed: 42,
            samples_per_channel: 0,
            delay_ns: 0,
        }
    }

    #[inline(always)]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[inline(always)]
    pub fn with_samples_per_channel(mut self, n: usize) -> Self {
        self.samples_per_channel = n;
        self
    }

    #[inline(always)]
    pub fn with_delay_ns(mut self, delay_ns: u64) -> Self {
        self.delay_ns = delay_ns;
        self
    }
}

// ============================================================================
// SUITE REPORT
// ============================================================================

/// What happened
#[derive(Debug, Clone)]
pub struct SuiteReport {
    pub cycles_run: u64,
    /// Result of the first cycle in this suite
    pub first_cycle: Option<OptimizationState>,
    /// Result of the last cycle in this suite
    pub last_cycle: Option<OptimizationState>,
    /// Mode changes observed during the suite
    pub mode_changes: u64,
    /// Cycles per level, indexed like [`OptimizationLevel::ALL`]
    pub level_histogram: [u64; 5],
    /// Engine summary after the final cycle
    pub summary: SummaryReport,
}

impl SuiteReport {
    /// Cycles that landed on `level`
    pub fn level_count(&self, level: OptimizationLevel) -> u64 {
        self.level_histogram[level as usize]
    }
}

/// Run `config.cycles` sequential cycles on `engine`, sleeping
/// `config.delay_ns` between them. Without `std` the delay is skipped.
pub fn run_suite(engine: &Engine, config: &SuiteConfig) -> SuiteReport {
    run_suite_with(engine, config, sleep)
}

/// Like [`run_suite`], but `pause` is called with `config.delay_ns` between
/// consecutive cycles. Advancing a shared `ManualClock` here simulates the
/// delay instead of waiting it out.
pub fn run_suite_with<F>(engine: &Engine, config: &SuiteConfig, mut pause: F) -> SuiteReport
where
    F: FnMut(u64),
{
    let mut generator =
        SignalGenerator::new(config.seed).with_samples_per_channel(config.samples_per_channel);

    let transitions_before = engine.mode_transitions();
    let mut level_histogram = [0u64; 5];
    let mut first = None;
    let mut last = None;

    for i in 0..config.cycles {
        if i > 0 && config.delay_ns > 0 {
            pause(config.delay_ns);
        }
        let reading = generator.next_reading();
        let state = engine.run_cycle(&reading, &config.environment);
        level_histogram[state.level as usize] += 1;

        #[cfg(feature = "verbose")]
        log::debug!(
            "Suite: cycle {} score={:.3} latency={:.3}ms level={}",
            state.cycle_count,
            state.performance_score,
            state.latency_ms,
            state.level
        );

        if first.is_none() {
            first = Some(state.clone());
        }
        last = Some(state);
    }

    let report = SuiteReport {
        cycles_run: config.cycles,
        first_cycle: first,
        last_cycle: last,
        mode_changes: engine.mode_transitions() - transitions_before,
        level_histogram,
        summary: engine.summary(),
    };

    log::info!(
        "Suite: {} cycles in '{}' avg score {:.3}, final mode {}",
        report.cycles_run,
        config.environment,
        report.summary.average_score,
        engine.mode()
    );

    report
}

#[cfg(feature = "std")]
fn sleep(nanos: u64) {
    std::thread::sleep(std::time::Duration::from_nanos(nanos));
}

#[cfg(not(feature = "std"))]
fn sleep(_nanos: u64) {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::sync::Arc;
    use autopt::{EngineLogger, ManualClock, NullMonitor};

    fn engine() -> Engine {
        Engine::builder()
            .with_retention(100)
            .with_clock(ManualClock::new(0).with_step(3_000_000))
            .with_monitor(NullMonitor)
            .with_logger(EngineLogger::silent())
            .build()
            .expect("valid engine")
    }

    #[test]
    fn test_suite_runs_sequentially() {
        let engine = engine();
        let report = run_suite(&engine, &SuiteConfig::new(25, "training"));
        assert_eq!(report.cycles_run, 25);
        assert_eq!(report.first_cycle.as_ref().map(|s| s.cycle_count), Some(1));
        assert_eq!(report.last_cycle.as_ref().map(|s| s.cycle_count), Some(25));
        assert_eq!(report.level_histogram.iter().sum::<u64>(), 25);
        assert_eq!(report.summary.total_cycles, 25);
        assert_eq!(engine.history().len(), 25);
    }

    #[test]
    fn test_back_to_back_suites_continue_numbering() {
        let engine = engine();
        run_suite(&engine, &SuiteConfig::new(10, "testing"));
        let report = run_suite(&engine, &SuiteConfig::new(5, "testing").with_seed(9));
        assert_eq!(report.first_cycle.as_ref().map(|s| s.cycle_count), Some(11));
        assert_eq!(report.last_cycle.as_ref().map(|s| s.cycle_count), Some(15));
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let a = run_suite(&engine(), &SuiteConfig::new(20, "research").with_samples_per_channel(8));
        let b = run_suite(&engine(), &SuiteConfig::new(20, "research").with_samples_per_channel(8));
        assert_eq!(a.level_histogram, b.level_histogram);
        assert_eq!(a.mode_changes, b.mode_changes);
        assert_eq!(a.summary.traits, b.summary.traits);
    }

    #[test]
    fn test_simulated_delay_spaces_timestamps() {
        let clock = Arc::new(ManualClock::new(0).with_step(1_000_000));
        let engine = Engine::builder()
            .with_clock(Arc::clone(&clock))
            .with_monitor(NullMonitor)
            .with_logger(EngineLogger::silent())
            .build()
            .expect("valid engine");

        let config = SuiteConfig::new(3, "testing").with_delay_ns(50_000_000);
        let mut pauses = 0;
        run_suite_with(&engine, &config, |nanos| {
            pauses += 1;
            clock.advance(nanos);
        });
        assert_eq!(pauses, 2);

        let history = engine.history();
        assert_eq!(history.len(), 3);
        for pair in history.windows(2) {
            // One delay plus the two monotonic reads of a cycle
            let gap = pair[1].timestamp.as_nanos() - pair[0].timestamp.as_nanos();
            assert_eq!(gap, 52_000_000);
            // The delay is outside the measured cycle
            assert!((pair[1].latency_ms - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_real_delay() {
        let engine = engine();
        let started = std::time::Instant::now();
        run_suite(&engine, &SuiteConfig::new(3, "testing").with_delay_ns(2_000_000));
        assert!(started.elapsed() >= std::time::Duration::from_millis(4));
    }

    #[test]
    fn test_empty_suite() {
        let engine = engine();
        let report = run_suite(&engine, &SuiteConfig::new(0, "production"));
        assert!(report.first_cycle.is_none());
        assert_eq!(report.level_count(OptimizationLevel::SotaChampion), 0);
        assert_eq!(report.summary.cycles_analyzed, 0);
    }
}
