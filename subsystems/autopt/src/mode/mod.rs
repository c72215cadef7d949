//! # Mode Control
//!
//! Four-state operating-mode machine. The next mode is a pure function of
//! the latest score and latency; the previous mode never participates, so
//! borderline scores can flip the mode on every cycle.

mod controller;

pub use controller::{ModeController, ModeTransition};
