//! Host system information.
//!
//! [`system_info`] is computed once per process and never fails: fields the
//! host does not report read `"Unknown"`, while the OS name and architecture
//! fall back to the values the binary was compiled for.

use once_cell::sync::Lazy;

mod host;
mod info;

pub use host::HostProvider;
pub use info::{SystemInfo, SystemInfoProvider, UNKNOWN};

static SYSTEM_INFO: Lazy<SystemInfo> = Lazy::new(|| SystemInfo::detect(&HostProvider));

/// Information about the running host, cached after the first call.
pub fn system_info() -> &'static SystemInfo { &SYSTEM_INFO }
