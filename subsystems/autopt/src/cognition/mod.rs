//! # Cognitive Traits
//!
//! Three scalar traits (`focus`, `resilience`, `adaptability`) that evolve
//! once per cycle through momentum-weighted smoothing of the cycle impact.

mod state;
mod value;

pub use state::TraitState;
pub use value::TraitValue;
