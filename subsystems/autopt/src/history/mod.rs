//! # History Buffers
//!
//! Bounded FIFO retention for the three per-cycle record streams:
//! experiences, generated models and optimization-state snapshots.

mod buffer;
mod records;

pub use buffer::BoundedBuffer;
pub use records::{Experience, GeneratedModel, OptimizationState, PredictedPerformance};
