//! Process resource probing.

/// One resource reading
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResourceSample {
    /// Resident memory (MB)
    pub memory_usage_mb: f64,
    /// CPU utilisation since the previous sample (percent of one core)
    pub cpu_usage_percent: f64,
}

/// Source of process resource figures.
///
/// Probing is best-effort: implementations report zeros rather than fail.
pub trait ResourceMonitor: Send {
    fn sample(&mut self) -> ResourceSample;
}

/// Monitor that always reports zeros
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMonitor;

impl ResourceMonitor for NullMonitor {
    fn sample(&mut self) -> ResourceSample {
        ResourceSample::default()
    }
}

// ============================================================================
// PROC MONITOR
// ============================================================================

/// Linux `/proc/self` probe.
///
/// Resident memory comes from `VmRSS` in `/proc/self/status` (reported in
/// kB, so page size does not matter). CPU time comes from
/// `/proc/self/schedstat` in nanoseconds, falling back to the `utime` and
/// `stime` tick counts of `/proc/self/stat` when schedstat is unavailable.
///
/// The files are read at most once per refresh interval; samples taken in
/// between return the cached figures without touching the filesystem.
#[cfg(all(feature = "std", target_os = "linux"))]
#[derive(Debug)]
pub struct ProcMonitor {
    refresh: std::time::Duration,
    last_probe: Option<std::time::Instant>,
    last_cpu_nanos: Option<u64>,
    cached: ResourceSample,
}

#[cfg(all(feature = "std", target_os = "linux"))]
impl ProcMonitor {
    /// Default minimum time between two filesystem probes
    pub const DEFAULT_REFRESH: std::time::Duration = std::time::Duration::from_millis(250);

    /// `/proc/<pid>/stat` times are in USER_HZ, which the kernel fixes at 100
    const USER_HZ: u64 = 100;

    pub fn new() -> Self {
        Self {
            refresh: Self::DEFAULT_REFRESH,
            last_probe: None,
            last_cpu_nanos: None,
            cached: ResourceSample::default(),
        }
    }

    /// Probe at most once per `refresh`; zero probes on every sample
    pub fn with_refresh_interval(mut self, refresh: std::time::Duration) -> Self {
        self.refresh = refresh;
        self
    }

    /// Resident set size in MB from the text of `/proc/self/status`
    fn parse_vm_rss_mb(status: &str) -> Option<f64> {
        let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
        let kb: f64 = line.split_whitespace().nth(1)?.parse().ok()?;
        Some(kb / 1024.0)
    }

    /// On-CPU time in ns from the text of `/proc/self/schedstat`
    fn parse_schedstat_nanos(schedstat: &str) -> Option<u64> {
        schedstat.split_whitespace().next()?.parse().ok()
    }

    /// utime + stime in ticks from the text of `/proc/self/stat`
    fn parse_stat_ticks(stat: &str) -> Option<u64> {
        // The command name may contain spaces; fields resume after the last ')'
        let rest = &stat[stat.rfind(')')? + 1..];
        let mut fields = rest.split_whitespace().skip(11);
        let utime: u64 = fields.next()?.parse().ok()?;
        let stime: u64 = fields.next()?.parse().ok()?;
        Some(utime + stime)
    }

    fn read_cpu_nanos() -> Option<u64> {
        if let Some(nanos) = std::fs::read_to_string("/proc/self/schedstat")
            .ok()
            .and_then(|s| Self::parse_schedstat_nanos(&s))
        {
            return Some(nanos);
        }
        let stat = std::fs::read_to_string("/proc/self/stat").ok()?;
        let ticks = Self::parse_stat_ticks(&stat)?;
        Some(ticks.saturating_mul(1_000_000_000 / Self::USER_HZ))
    }

    fn probe(&mut self, now: std::time::Instant) -> ResourceSample {
        let memory_usage_mb = std::fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|s| Self::parse_vm_rss_mb(&s))
            .unwrap_or(0.0);

        let cpu_nanos = Self::read_cpu_nanos();
        let cpu_usage_percent = match (cpu_nanos, self.last_cpu_nanos, self.last_probe) {
            (Some(cpu), Some(prev_cpu), Some(prev_probe)) => {
                let wall = now.duration_since(prev_probe).as_nanos() as f64;
                if wall > 0.0 {
                    (cpu.saturating_sub(prev_cpu) as f64 / wall * 100.0).max(0.0)
                } else {
                    0.0
                }
            },
            _ => 0.0,
        };

        self.last_cpu_nanos = cpu_nanos;
        self.last_probe = Some(now);
        ResourceSample {
            memory_usage_mb,
            cpu_usage_percent,
        }
    }
}

#[cfg(all(feature = "std", target_os = "linux"))]
impl Default for ProcMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(feature = "std", target_os = "linux"))]
impl ResourceMonitor for ProcMonitor {
    fn sample(&mut self) -> ResourceSample {
        let now = std::time::Instant::now();
        let fresh = match self.last_probe {
            Some(prev) => now.duration_since(prev) < self.refresh,
            None => false,
        };
        if !fresh {
            self.cached = self.probe(now);
        }
        self.cached
    }
}
