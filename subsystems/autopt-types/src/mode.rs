//! Operating modes

// ============================================================================
// OPTIMIZATION MODE
// ============================================================================

/// Operating regime selected by the mode controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptimizationMode {
    /// Latency-first
    Performance,
    /// Resource-first, selected when the engine is slow and scoring poorly
    Efficiency,
    /// Default middle ground
    Balanced,
    /// Exploratory regime, also the initial mode
    Adaptive,
}

impl OptimizationMode {
    /// All modes
    pub const ALL: [OptimizationMode; 4] = [
        OptimizationMode::Performance,
        OptimizationMode::Efficiency,
        OptimizationMode::Balanced,
        OptimizationMode::Adaptive,
    ];

    /// Mode name as reported
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::Efficiency => "efficiency",
            Self::Balanced => "balanced",
            Self::Adaptive => "adaptive",
        }
    }
}

impl Default for OptimizationMode {
    fn default() -> Self {
        Self::Adaptive
    }
}

impl core::fmt::Display for OptimizationMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
