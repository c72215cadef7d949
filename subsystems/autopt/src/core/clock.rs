//! Clock sources.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicU64, Ordering};

use super::timestamp::Timestamp;

// ============================================================================
// CLOCK TRAIT
// ============================================================================

/// Time source used for cycle latency and record timestamps
pub trait Clock: Send {
    /// Current wall-clock time
    fn now(&self) -> Timestamp;

    /// Monotonic nanosecond counter; only differences are meaningful
    fn monotonic_nanos(&self) -> u64;
}

/// A shared clock, so the host can keep a handle to the engine's time source
impl<C: Clock + Sync + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }

    fn monotonic_nanos(&self) -> u64 {
        (**self).monotonic_nanos()
    }
}

// ============================================================================
// MANUAL CLOCK
// ============================================================================

/// Deterministic clock driven by the host.
///
/// Every monotonic read advances the clock by `step` nanoseconds, so a
/// cycle that reads it twice observes a latency of exactly `step`.
#[derive(Debug)]
pub struct ManualClock {
    nanos: AtomicU64,
    step: AtomicU64,
}

impl ManualClock {
    /// Create a clock starting at `start` with no automatic step
    pub const fn new(start: u64) -> Self {
        Self {
            nanos: AtomicU64::new(start),
            step: AtomicU64::new(0),
        }
    }

    /// Advance by `step` nanoseconds on every monotonic read
    pub fn with_step(self, step: u64) -> Self {
        self.step.store(step, Ordering::Relaxed);
        self
    }

    /// Change the automatic step
    pub fn set_step(&self, step: u64) {
        self.step.store(step, Ordering::Relaxed);
    }

    /// Advance manually
    pub fn advance(&self, nanos: u64) {
        self.nanos.fetch_add(nanos, Ordering::Relaxed);
    }

    /// Current reading without advancing
    pub fn peek(&self) -> u64 {
        self.nanos.load(Ordering::Relaxed)
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_nanos(self.peek())
    }

    fn monotonic_nanos(&self) -> u64 {
        let step = self.step.load(Ordering::Relaxed);
        self.nanos.fetch_add(step, Ordering::Relaxed)
    }
}

// ============================================================================
// STD CLOCK
// ============================================================================

/// Hosted clock: `SystemTime` for timestamps, `Instant` for latency
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now(&self) -> Timestamp {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
            .unwrap_or(0);
        Timestamp::from_nanos(nanos)
    }

    fn monotonic_nanos(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}
