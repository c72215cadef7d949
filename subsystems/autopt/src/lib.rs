//! # autopt
//!
//! Autonomous optimization engine: a self-tuning control loop that ingests
//! scalar signal readings, evolves a small set of cognitive traits, scores
//! its own recent performance against fixed targets and uses that score to
//! pick an operating mode.
//!
//! ## Cycle Pipeline
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐
//! │  FILTER  │──▶│  IMPACT  │──▶│ REFLECT  │──▶│  EVOLVE  │──▶│  MODEL   │
//! └──────────┘   └──────────┘   └──────────┘   └──────────┘   └────┬─────┘
//!                                                                   │
//!      ┌────────────────────────────────────────────────────────────┘
//!      ▼
//! ┌──────────┐   ┌──────────┐   ┌──────────┐
//! │  SCORE   │──▶│ HISTORY  │──▶│   MODE   │──▶ OptimizationState
//! └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! Data flows strictly forward. Only the trait state and the three history
//! buffers persist between cycles, and both are owned by [`Engine`].
//!
//! ## Example
//!
//! ```
//! use autopt::{Engine, SignalReading};
//!
//! let engine = Engine::new(1000);
//! let reading = SignalReading::new()
//!     .with_scalar("alpha", 0.9)
//!     .with_scalar("beta", 0.6);
//!
//! let state = engine.run_cycle(&reading, "training");
//! assert_eq!(state.cycle_count, 1);
//! assert!((0.0..=1.0).contains(&state.performance_score));
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

pub mod cognition;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod history;
pub mod math;
pub mod mode;
pub mod perf;
pub mod reflect;
pub mod signal;
pub mod stats;

pub use autopt_types as types;
pub use autopt_types::{Band, ModelId, OptimizationLevel, OptimizationMode, TraitKind, Trend};

pub use crate::cognition::{TraitState, TraitValue};
pub use crate::config::{EngineConfig, ModeProfile, SotaTargets};
pub use crate::core::{Clock, EngineLogger, ManualClock, NullMonitor, ResourceMonitor, Timestamp};
pub use crate::engine::{Engine, EngineBuilder, SummaryReport};
pub use crate::error::{EngineError, EngineResult};
pub use crate::history::{Experience, GeneratedModel, OptimizationState, PredictedPerformance};
pub use crate::reflect::ReflectiveInsight;
pub use crate::signal::{ChannelValue, FilteredSignal, SignalReading};

#[cfg(feature = "std")]
pub use crate::core::StdClock;

#[cfg(all(feature = "std", target_os = "linux"))]
pub use crate::core::ProcMonitor;
