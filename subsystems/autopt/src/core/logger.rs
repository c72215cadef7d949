//! Engine-scoped logging handle.
//!
//! Each engine owns its own logger, so two engines in one process can be
//! told apart (and filtered) by target without any global state of ours.

use alloc::string::String;
use core::fmt;

use log::{Level, LevelFilter};

/// Logger handle injected at construction
#[derive(Debug, Clone)]
pub struct EngineLogger {
    target: String,
    max_level: LevelFilter,
}

impl EngineLogger {
    /// Default target
    pub const DEFAULT_TARGET: &'static str = "autopt::engine";

    /// Logger with the given target, passing every level to `log`
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            max_level: LevelFilter::Trace,
        }
    }

    /// Logger that emits nothing
    pub fn silent() -> Self {
        Self::new(Self::DEFAULT_TARGET).with_max_level(LevelFilter::Off)
    }

    /// Cap the levels this handle forwards
    pub fn with_max_level(mut self, max_level: LevelFilter) -> Self {
        self.max_level = max_level;
        self
    }

    /// Target name
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Would a record at `level` be forwarded?
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level <= self.max_level && level <= log::max_level()
    }

    /// Forward a record
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            log::log!(target: self.target.as_str(), level, "{}", args);
        }
    }

    #[inline]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    #[inline]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    #[inline]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    #[inline]
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Trace, args);
    }
}

impl Default for EngineLogger {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TARGET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_logger_disables_everything() {
        let logger = EngineLogger::silent();
        assert!(!logger.enabled(Level::Error));
        assert!(!logger.enabled(Level::Trace));
        logger.warn(format_args!("dropped"));
    }

    #[test]
    fn test_level_cap() {
        let logger = EngineLogger::new("test").with_max_level(LevelFilter::Warn);
        assert_eq!(logger.target(), "test");
        // Info is above the handle's cap regardless of the global level
        assert!(!logger.enabled(Level::Info));
    }
}
