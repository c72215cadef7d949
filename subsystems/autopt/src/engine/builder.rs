//! Engine construction.

use alloc::boxed::Box;

use super::{Engine, EngineCore};
use crate::config::{EngineConfig, DEFAULT_RETENTION};
use crate::core::{Clock, EngineLogger, ResourceMonitor};
use crate::error::{EngineError, EngineResult};

/// Assembles an [`Engine`] from config and host services
pub struct EngineBuilder {
    config: EngineConfig,
    retention: usize,
    clock: Option<Box<dyn Clock>>,
    monitor: Option<Box<dyn ResourceMonitor>>,
    logger: EngineLogger,
}

impl EngineBuilder {
    /// Default config, 1000-entry retention, default host services
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            retention: DEFAULT_RETENTION,
            clock: None,
            monitor: None,
            logger: EngineLogger::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Capacity of each of the three history buffers
    pub fn with_retention(mut self, retention: usize) -> Self {
        self.retention = retention;
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn with_monitor(mut self, monitor: impl ResourceMonitor + 'static) -> Self {
        self.monitor = Some(Box::new(monitor));
        self
    }

    pub fn with_logger(mut self, logger: EngineLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Validate and build
    pub fn build(self) -> EngineResult<Engine> {
        if self.retention == 0 {
            self.logger
                .warn(format_args!("Engine: rejected retention size 0"));
            return Err(EngineError::InvalidRetention(0));
        }
        if let Err(e) = self.config.validate() {
            self.logger.warn(format_args!("Engine: rejected config: {}", e));
            return Err(e);
        }
        Ok(self.assemble())
    }

    /// Build without validation; callers guarantee a valid config
    pub(crate) fn assemble(self) -> Engine {
        let clock = self.clock.unwrap_or_else(default_clock);
        let monitor = self.monitor.unwrap_or_else(default_monitor);
        self.logger.debug(format_args!(
            "Engine: created with retention {}",
            self.retention
        ));
        Engine::from_core(
            EngineCore::new(self.config, self.retention, clock, monitor, self.logger),
            self.retention,
        )
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for EngineBuilder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EngineBuilder")
            .field("config", &self.config)
            .field("retention", &self.retention)
            .field("custom_clock", &self.clock.is_some())
            .field("custom_monitor", &self.monitor.is_some())
            .field("logger", &self.logger)
            .finish()
    }
}

#[cfg(feature = "std")]
fn default_clock() -> Box<dyn Clock> {
    Box::new(crate::core::StdClock::new())
}

#[cfg(not(feature = "std"))]
fn default_clock() -> Box<dyn Clock> {
    Box::new(crate::core::ManualClock::default())
}

#[cfg(all(feature = "std", target_os = "linux"))]
fn default_monitor() -> Box<dyn ResourceMonitor> {
    Box::new(crate::core::ProcMonitor::new())
}

#[cfg(not(all(feature = "std", target_os = "linux")))]
fn default_monitor() -> Box<dyn ResourceMonitor> {
    Box::new(crate::core::NullMonitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ManualClock, NullMonitor};

    #[test]
    fn test_build_default() {
        let engine = EngineBuilder::new()
            .with_clock(ManualClock::default())
            .with_monitor(NullMonitor)
            .with_logger(EngineLogger::silent())
            .build();
        assert!(engine.is_ok());
    }

    #[test]
    fn test_rejects_zero_retention() {
        let err = EngineBuilder::new().with_retention(0).build().unwrap_err();
        assert_eq!(err, EngineError::InvalidRetention(0));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = EngineConfig {
            adaptation_rate: 0.0,
            ..EngineConfig::default()
        };
        let err = EngineBuilder::new().with_config(config).build().unwrap_err();
        assert_eq!(err.field(), Some("adaptation_rate"));
    }
}
