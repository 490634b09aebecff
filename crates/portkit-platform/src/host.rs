use sysinfo::System;

use crate::info::SystemInfoProvider;

/// Reads the running host through `sysinfo` and OS-specific sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostProvider;

impl SystemInfoProvider for HostProvider {
    fn os_name(&self) -> Option<String> { System::name() }

    fn os_version(&self) -> Option<String> { System::os_version() }

    fn arch(&self) -> Option<String> { Some(System::cpu_arch()) }

    fn model(&self) -> Option<String> { model::detect() }
}

#[cfg(target_os = "linux")]
mod model {
    use std::fs;

    const SOURCES: &[&str] = &[
        "/sys/devices/virtual/dmi/id/product_name",
        "/sys/firmware/devicetree/base/model",
        "/proc/device-tree/model",
    ];

    pub fn detect() -> Option<String> {
        SOURCES
            .iter()
            .filter_map(|path| fs::read_to_string(path).ok())
            .map(|s| s.trim_matches(|c: char| c.is_whitespace() || c == '\0').to_string())
            .find(|s| !s.is_empty())
    }
}

#[cfg(target_os = "macos")]
mod model {
    pub fn detect() -> Option<String> { Some("Mac".to_string()) }
}

#[cfg(target_os = "windows")]
mod model {
    pub fn detect() -> Option<String> { Some("PC".to_string()) }
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
mod model {
    pub fn detect() -> Option<String> { None }
}
