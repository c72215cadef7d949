//! Raw signal readings.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// Value carried by one channel
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelValue {
    /// A single measurement
    Scalar(f64),
    /// A window of samples
    Samples(Vec<f64>),
}

impl From<f64> for ChannelValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<f64>> for ChannelValue {
    fn from(samples: Vec<f64>) -> Self {
        Self::Samples(samples)
    }
}

/// One reading pushed into the engine per cycle.
///
/// Channel names are trimmed and lowercased on insertion; inserting the same
/// name twice keeps the later value. Unrecognized names are kept here but
/// ignored by the filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalReading {
    channels: BTreeMap<String, ChannelValue>,
}

impl SignalReading {
    /// Empty reading
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a channel
    pub fn insert(&mut self, name: &str, value: impl Into<ChannelValue>) {
        self.channels
            .insert(name.trim().to_ascii_lowercase(), value.into());
    }

    /// Builder form of [`insert`](Self::insert) for a scalar
    pub fn with_scalar(mut self, name: &str, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Builder form of [`insert`](Self::insert) for a sample window
    pub fn with_samples(mut self, name: &str, samples: Vec<f64>) -> Self {
        self.insert(name, samples);
        self
    }

    /// Look up a channel by (normalized) name
    pub fn get(&self, name: &str) -> Option<&ChannelValue> {
        self.channels.get(name.trim().to_ascii_lowercase().as_str())
    }

    /// Iterate channels in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChannelValue)> {
        self.channels.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl<K: AsRef<str>> FromIterator<(K, f64)> for SignalReading {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut reading = Self::new();
        for (name, value) in iter {
            reading.insert(name.as_ref(), value);
        }
        reading
    }
}

impl From<BTreeMap<String, f64>> for SignalReading {
    fn from(map: BTreeMap<String, f64>) -> Self {
        map.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_normalized() {
        let reading = SignalReading::new()
            .with_scalar(" Alpha ", 0.7)
            .with_scalar("alpha", 0.9);
        assert_eq!(reading.len(), 1);
        assert_eq!(reading.get("ALPHA"), Some(&ChannelValue::Scalar(0.9)));
    }

    #[test]
    fn test_from_pairs() {
        let reading: SignalReading = [("beta", 0.5), ("noise", 3.0)].into_iter().collect();
        assert_eq!(reading.len(), 2);
        assert!(reading.get("noise").is_some());
    }

    #[test]
    fn test_samples_channel() {
        let reading = SignalReading::new().with_samples("gamma", alloc::vec![0.1, 0.9]);
        assert_eq!(
            reading.get("gamma"),
            Some(&ChannelValue::Samples(alloc::vec![0.1, 0.9]))
        );
    }
}
