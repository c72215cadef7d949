//! # Core Services
//!
//! Host-facing seams the engine is constructed with: a clock, a resource
//! monitor and a scoped logger. Everything platform-specific lives behind
//! these so the cycle pipeline itself stays `no_std`.

mod clock;
mod logger;
mod monitor;
mod timestamp;

pub use clock::{Clock, ManualClock};
#[cfg(feature = "std")]
pub use clock::StdClock;
pub use logger::EngineLogger;
#[cfg(all(feature = "std", target_os = "linux"))]
pub use monitor::ProcMonitor;
pub use monitor::{NullMonitor, ResourceMonitor, ResourceSample};
pub use timestamp::Timestamp;
