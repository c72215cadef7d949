//! # Engine Error Types
//!
//! Errors exist only on the construction path. Once an [`Engine`] is built,
//! every operation on it is total: malformed input degrades to default
//! behavior instead of surfacing as a failure.
//!
//! [`Engine`]: crate::Engine

use alloc::string::String;
use core::fmt;

// ============================================================================
// RESULT TYPE
// ============================================================================

/// Result type for engine construction
pub type EngineResult<T> = Result<T, EngineError>;

// ============================================================================
// MAIN ERROR ENUM
// ============================================================================

/// Main error type for the engine
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A configuration field failed validation
    InvalidConfig { field: &'static str, reason: String },

    /// Buffers must retain at least one entry
    InvalidRetention(usize),
}

impl EngineError {
    /// Shorthand for a config validation failure
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidConfig { field, .. } => Some(field),
            Self::InvalidRetention(_) => Some("retention_size"),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            },
            Self::InvalidRetention(size) => {
                write!(f, "Invalid retention size {}: must be at least 1", size)
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = EngineError::invalid_config("momentum", "must be in [0, 1)");
        let display = alloc::format!("{}", error);
        assert!(display.contains("momentum"));
        assert!(display.contains("[0, 1)"));
    }

    #[test]
    fn test_error_field() {
        assert_eq!(EngineError::InvalidRetention(0).field(), Some("retention_size"));
        assert_eq!(
            EngineError::invalid_config("channel_weights", "sum").field(),
            Some("channel_weights")
        );
    }
}
