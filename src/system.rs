//! System introspection behind a read-only provider trait.
//!
//! Handlers read hostname, memory, and uptime at request time through
//! `SystemInfo` instead of free-floating OS calls, so tests can inject a
//! deterministic provider. `HostSystem` is the production implementation
//! backed by the `sysinfo` crate.

use std::sync::Mutex;
use std::time::Instant;

use sysinfo::{RefreshKind, System};

use crate::config::RUNTIME_VERSION;

/// Bytes per GiB, for memory figures reported in "GB".
const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Read-only access to the host and process facts reported by the API.
pub trait SystemInfo: Send + Sync {
    /// Host name of the machine (the container hostname under orchestration).
    fn hostname(&self) -> String;

    /// Operating system family, e.g. "linux".
    fn platform(&self) -> &'static str;

    /// CPU architecture, e.g. "x86_64".
    fn arch(&self) -> &'static str;

    /// Logical CPU count.
    fn cpu_count(&self) -> usize;

    /// Total memory in bytes, refreshed at call time.
    fn total_memory(&self) -> u64;

    /// Free memory in bytes, refreshed at call time.
    fn free_memory(&self) -> u64;

    /// Process uptime in fractional seconds.
    fn uptime_secs(&self) -> f64;

    /// Runtime version string reported by the health endpoint.
    fn runtime_version(&self) -> String;
}

/// Format a byte count as GiB with exactly two decimals and a "GB" suffix.
pub fn format_gib(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / BYTES_PER_GIB)
}

/// Production provider reading from the host via `sysinfo`.
///
/// Memory readings go through a mutex-guarded `System` refreshed on every
/// read: the figures must reflect the state at response time, not at startup.
/// The CPU count is fixed for the process lifetime and read once.
pub struct HostSystem {
    system: Mutex<System>,
    cpu_count: usize,
    started: Instant,
}

impl HostSystem {
    pub fn new() -> Self {
        let mut system = System::new_with_specifics(RefreshKind::everything());
        system.refresh_all();
        let cpu_count = system.cpus().len();

        Self {
            system: Mutex::new(system),
            cpu_count,
            started: Instant::now(),
        }
    }
}

impl Default for HostSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemInfo for HostSystem {
    fn hostname(&self) -> String {
        System::host_name().unwrap_or_else(|| "unknown".to_string())
    }

    fn platform(&self) -> &'static str {
        std::env::consts::OS
    }

    fn arch(&self) -> &'static str {
        std::env::consts::ARCH
    }

    fn cpu_count(&self) -> usize {
        self.cpu_count
    }

    fn total_memory(&self) -> u64 {
        let mut system = self.system.lock().expect("system info lock poisoned");
        system.refresh_memory();
        system.total_memory()
    }

    fn free_memory(&self) -> u64 {
        let mut system = self.system.lock().expect("system info lock poisoned");
        system.refresh_memory();
        system.free_memory()
    }

    fn uptime_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    fn runtime_version(&self) -> String {
        RUNTIME_VERSION.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_gib_zero() {
        assert_eq!(format_gib(0), "0.00 GB");
    }

    #[test]
    fn test_format_gib_whole() {
        assert_eq!(format_gib(16 * 1024 * 1024 * 1024), "16.00 GB");
    }

    #[test]
    fn test_format_gib_rounds_to_two_decimals() {
        // 8.2 GiB plus a little; must round to exactly two decimals
        assert_eq!(format_gib(8_804_682_957), "8.20 GB");
        assert_eq!(format_gib(1_610_612_736), "1.50 GB");
    }

    #[test]
    fn test_host_system_reports_plausible_values() {
        let host = HostSystem::new();
        assert!(host.cpu_count() >= 1);
        assert!(host.total_memory() > 0);
        assert!(host.total_memory() >= host.free_memory());
        assert!(host.uptime_secs() >= 0.0);
        assert!(!host.hostname().is_empty());
    }

    #[test]
    fn test_runtime_version_names_rust() {
        let host = HostSystem::new();
        assert!(host.runtime_version().starts_with("rust/"));
    }
}
