use serde::{Deserialize, Serialize};
use tracing::debug;

/// Placeholder for any field the host does not report.
pub const UNKNOWN: &str = "Unknown";

/// Source of raw host facts. Any field may be missing.
pub trait SystemInfoProvider {
    fn os_name(&self) -> Option<String>;
    fn os_version(&self) -> Option<String>;
    fn arch(&self) -> Option<String>;
    fn model(&self) -> Option<String>;
}

/// Basic facts about the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// e.g. "Ubuntu", "Darwin", "Windows"
    pub os_name:    String,
    pub os_version: String,
    /// CPU architecture, e.g. "x86_64" or "arm64"
    pub arch:       String,
    /// Device model, e.g. "Mac", "PC" or a DMI product name
    pub model:      String,
}

impl SystemInfo {
    /// Query `provider` and fill the gaps.
    pub fn detect(provider: &impl SystemInfoProvider) -> Self {
        let info = Self {
            os_name:    clean(provider.os_name()).unwrap_or_else(|| std::env::consts::OS.to_string()),
            os_version: clean(provider.os_version()).unwrap_or_else(|| UNKNOWN.to_string()),
            arch:       clean(provider.arch()).unwrap_or_else(|| std::env::consts::ARCH.to_string()),
            model:      clean(provider.model()).unwrap_or_else(|| UNKNOWN.to_string()),
        };
        debug!(
            os = %info.os_name,
            version = %info.os_version,
            arch = %info.arch,
            model = %info.model,
            "detected system info"
        );
        info
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim_matches(|c: char| c.is_whitespace() || c == '\0').to_string())
        .filter(|v| !v.is_empty())
}
