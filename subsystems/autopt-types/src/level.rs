//! Optimization levels

// ============================================================================
// OPTIMIZATION LEVEL
// ============================================================================

/// Discrete classification of a performance score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptimizationLevel {
    /// Score below 0.6
    OptimizationNeeded = 0,
    /// Score in [0.6, 0.7)
    IndustryStandard   = 1,
    /// Score in [0.7, 0.8)
    IndustryLeading    = 2,
    /// Score in [0.8, 0.9)
    SotaCompetitive    = 3,
    /// Score of 0.9 or above
    SotaChampion       = 4,
}

impl OptimizationLevel {
    /// All levels, lowest first
    pub const ALL: [OptimizationLevel; 5] = [
        OptimizationLevel::OptimizationNeeded,
        OptimizationLevel::IndustryStandard,
        OptimizationLevel::IndustryLeading,
        OptimizationLevel::SotaCompetitive,
        OptimizationLevel::SotaChampion,
    ];

    /// Classify a score. Thresholds are fixed.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            Self::SotaChampion
        } else if score >= 0.8 {
            Self::SotaCompetitive
        } else if score >= 0.7 {
            Self::IndustryLeading
        } else if score >= 0.6 {
            Self::IndustryStandard
        } else {
            Self::OptimizationNeeded
        }
    }

    /// Level name as reported
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OptimizationNeeded => "OPTIMIZATION_NEEDED",
            Self::IndustryStandard => "INDUSTRY_STANDARD",
            Self::IndustryLeading => "INDUSTRY_LEADING",
            Self::SotaCompetitive => "SOTA_COMPETITIVE",
            Self::SotaChampion => "SOTA_CHAMPION",
        }
    }
}

impl core::fmt::Display for OptimizationLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
