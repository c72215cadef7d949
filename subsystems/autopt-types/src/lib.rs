//! # autopt Types
//!
//! Shared vocabulary for the autonomous optimization engine and its drivers.
//!
//! Everything here is plain data: typed identifiers, the five recognized
//! signal bands, the three cognitive traits, the operating modes and the
//! discrete optimization levels. No behavior beyond classification and
//! name lookup lives in this crate.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[cfg(test)]
extern crate alloc;

pub mod band;
pub mod cognitive;
pub mod identifiers;
pub mod level;
pub mod mode;
pub mod trend;

pub use band::Band;
pub use cognitive::TraitKind;
pub use identifiers::ModelId;
pub use level::OptimizationLevel;
pub use mode::OptimizationMode;
pub use trend::Trend;
