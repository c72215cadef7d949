//! # Performance Scoring
//!
//! Folds cycle latency, impact, trait balance and distance to the latency
//! target into one normalized score, and classifies it.

mod scorer;

pub use scorer::{PerformanceScorer, MAX_ACCURACY};
