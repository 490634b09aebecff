use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use portkit_fs::ErrorCode;

use crate::core::progress_fraction;
use crate::error::FetchError;

/// Underlying failure preserved on [`DownloadStatus::Error`] for diagnostics.
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// One step of a download, as observed by the consumer of the status stream.
///
/// A stream produced by [`Downloader::download`](crate::Downloader::download)
/// always starts with [`Pending`](Self::Pending), carries zero or more
/// [`Downloading`](Self::Downloading) events with non-decreasing byte counts,
/// and ends with exactly one [`Completed`](Self::Completed) or
/// [`Error`](Self::Error).
#[derive(Debug, Clone, Default)]
pub enum DownloadStatus {
    /// Not started yet. Never emitted by the engine; useful as an initial UI state.
    #[default]
    Idle,

    /// Request issued, waiting for response headers.
    Pending,

    /// A chunk has been written to the destination.
    Downloading {
        /// Fraction in `0.0..=1.0`, or `None` when the total size is unknown.
        progress:         Option<f32>,
        bytes_downloaded: u64,
        /// Declared `Content-Length`, if the server sent one.
        total_bytes:      Option<u64>,
    },

    /// Destination fully written, flushed and closed.
    Completed { path: PathBuf },

    Error {
        message: String,
        code:    ErrorCode,
        cause:   Option<Cause>,
    },
}

impl DownloadStatus {
    pub(crate) fn downloading(bytes_downloaded: u64, total_bytes: Option<u64>) -> Self {
        Self::Downloading {
            progress: progress_fraction(bytes_downloaded, total_bytes),
            bytes_downloaded,
            total_bytes,
        }
    }

    pub(crate) fn failed(err: FetchError) -> Self {
        Self::Error {
            message: err.to_string(),
            code:    err.code(),
            cause:   Some(Arc::new(err)),
        }
    }

    /// Returns `true` for [`Completed`](Self::Completed) and [`Error`](Self::Error).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed { .. } | Self::Error { .. })
    }

    pub fn bytes_downloaded(&self) -> Option<u64> {
        match self {
            Self::Downloading {
                bytes_downloaded, ..
            } => Some(*bytes_downloaded),
            _ => None,
        }
    }

    /// The [`FetchError`] behind an [`Error`](Self::Error) status, if any.
    pub fn fetch_error(&self) -> Option<&FetchError> {
        match self {
            Self::Error {
                cause: Some(cause), ..
            } => cause.downcast_ref::<FetchError>(),
            _ => None,
        }
    }
}

impl fmt::Display for DownloadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Pending => write!(f, "Pending"),
            Self::Downloading {
                progress: Some(p),
                bytes_downloaded,
                ..
            } => write!(f, "Downloading {:.1}% ({bytes_downloaded} bytes)", p * 100.0),
            Self::Downloading {
                bytes_downloaded, ..
            } => write!(f, "Downloading ({bytes_downloaded} bytes)"),
            Self::Completed { path } => write!(f, "Completed: {}", path.display()),
            Self::Error { code, message, .. } => write!(f, "Error [{code}]: {message}"),
        }
    }
}
