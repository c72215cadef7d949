//! Trend classification

/// Direction of a series over the summary window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Trend {
    Improving,
    Declining,
    #[default]
    Stable,
}

impl Trend {
    /// Dead-band around zero slope treated as stable
    pub const DEAD_BAND: f64 = 0.01;

    /// Classify a slope where a rising series is an improvement
    pub fn from_rising_slope(slope: f64) -> Self {
        if slope > Self::DEAD_BAND {
            Self::Improving
        } else if slope < -Self::DEAD_BAND {
            Self::Declining
        } else {
            Self::Stable
        }
    }

    /// Classify a slope where a falling series is an improvement
    pub fn from_falling_slope(slope: f64) -> Self {
        Self::from_rising_slope(-slope)
    }

    /// Trend name as reported
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
        }
    }
}

impl core::fmt::Display for Trend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_band() {
        assert_eq!(Trend::from_rising_slope(0.005), Trend::Stable);
        assert_eq!(Trend::from_rising_slope(-0.01), Trend::Stable);
        assert_eq!(Trend::from_rising_slope(0.02), Trend::Improving);
        assert_eq!(Trend::from_rising_slope(-0.02), Trend::Declining);
    }

    #[test]
    fn test_falling_series_inverts() {
        assert_eq!(Trend::from_falling_slope(-0.5), Trend::Improving);
        assert_eq!(Trend::from_falling_slope(0.5), Trend::Declining);
    }

    #[test]
    fn test_nan_slope_is_stable() {
        assert_eq!(Trend::from_rising_slope(f64::NAN), Trend::Stable);
    }
}
