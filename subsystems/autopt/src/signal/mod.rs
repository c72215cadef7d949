//! # Signal Intake
//!
//! Readings arrive as named channels. Only the five recognized bands are
//! scored; the adaptive filter drops weak values and the impact scorer folds
//! the survivors into one bounded scalar.

mod filter;
mod growth;
mod impact;
mod reading;

pub use filter::{AdaptiveFilter, FilteredSignal};
pub use growth::{GrowthInputs, DEFAULT_MODEL_IMPACT, RECENT_MODEL_WINDOW};
pub use impact::SignalImpactScorer;
pub use reading::{ChannelValue, SignalReading};
