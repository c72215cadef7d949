//! Synthetic signal generator

use alloc::vec::Vec;

use autopt::SignalReading;
use autopt_types::Band;

// ============================================================================
// SIGNAL GENERATOR
// ============================================================================

/// Seeded xorshift64 source of readings over all five bands
#[derive(Debug, Clone)]
pub struct SignalGenerator {
    state: u64,
    samples_per_channel: usize,
}

impl SignalGenerator {
    /// Create a generator. A zero seed is replaced by a fixed non-zero one.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
            samples_per_channel: 0,
        }
    }

    /// Emit sample windows of `n` values instead of scalars (0 = scalars)
    #[inline(always)]
    pub fn with_samples_per_channel(mut self, n: usize) -> Self {
        self.samples_per_channel = n;
        self
    }

    fn xorshift64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform value in `[0, 1)`
    pub fn next_unit(&mut self) -> f64 {
        (self.xorshift64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Next reading covering every band
    pub fn next_reading(&mut self) -> SignalReading {
        let mut reading = SignalReading::new();
        for band in Band::ALL {
            if self.samples_per_channel == 0 {
                let value = self.next_unit();
                reading.insert(band.name(), value);
            } else {
                let samples: Vec<f64> = (0..self.samples_per_channel)
                    .map(|_| self.next_unit())
                    .collect();
                reading.insert(band.name(), samples);
            }
        }
        reading
    }
}

impl Iterator for SignalGenerator {
    type Item = SignalReading;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_reading())
    }
}
