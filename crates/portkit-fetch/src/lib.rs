//! Streaming HTTP downloads with pull-based progress reporting.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Configuration and the [`DownloadStatus`] events
//! - [`core`] - Pure helpers (status classification, progress math)
//! - [`effects`] - The [`HttpClient`] capability and the [`Downloader`]
//!
//! # Example
//!
//! ```no_run
//! use futures_util::StreamExt;
//! use portkit_fetch::{DownloadStatus, Downloader, ReqwestClient};
//!
//! # async fn run() {
//! let downloader = Downloader::new(ReqwestClient::new());
//! let mut events = downloader.download("https://example.com/file.zip", "downloads/file.zip");
//! while let Some(status) = events.next().await {
//!     if let DownloadStatus::Error { code, message, .. } = &status {
//!         eprintln!("{code}: {message}");
//!     }
//! }
//! # }
//! ```

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use crate::core::{is_success, progress_fraction};
pub use data::{Cause, DEFAULT_CHUNK_SIZE, DownloadOptions, DownloadStatus, PartialFile};
pub use effects::{BoxStream, DownloadStream, Downloader, HttpClient, HttpResponse};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{FetchError, Result};
