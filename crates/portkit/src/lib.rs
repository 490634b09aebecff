//! portkit: a small cross-platform toolbox.
//!
//! - [`Downloader`] streams an HTTP resource to disk and reports
//!   [`DownloadStatus`] events along the way.
//! - [`FileManager`] lists, copies, moves and deletes files and extracts ZIP
//!   archives, reporting every outcome as a [`FileResult`].
//! - [`system_info`] describes the host.
//!
//! # Example
//!
//! ```no_run
//! use futures_util::StreamExt;
//! use portkit::{DownloadStatus, Downloader, FileManager, ReqwestClient};
//!
//! # async fn run() -> portkit::FileResult<()> {
//! let mut events = Downloader::new(ReqwestClient::new())
//!     .download("https://example.com/assets.zip", "cache/assets.zip");
//! while let Some(status) = events.next().await {
//!     if let DownloadStatus::Error { message, code, .. } = status {
//!         return Err(portkit::FileError::new(code, message));
//!     }
//! }
//!
//! let out = FileManager::new().unzip("cache/assets.zip")?;
//! println!("extracted to {}", out.display());
//! # Ok(())
//! # }
//! ```

mod manager;

pub use manager::FileManager;
pub use portkit_archive as archive;
pub use portkit_fetch as fetch;
pub use portkit_fs as fs;
pub use portkit_platform as platform;

pub use portkit_fetch::{DownloadOptions, DownloadStatus, Downloader, HttpClient, PartialFile};
#[cfg(feature = "reqwest")]
pub use portkit_fetch::ReqwestClient;
pub use portkit_fs::{ErrorCode, FileError, FileResult};
pub use portkit_platform::{SystemInfo, system_info};
