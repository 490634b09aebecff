//! Error types for portkit-fetch.

use std::io;
use std::path::PathBuf;

use portkit_fs::ErrorCode;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("download failed, HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("network error: {0}")]
    Network(#[source] BoxError),

    #[error("failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to decode response body: {0}")]
    Decode(#[source] BoxError),
}

impl FetchError {
    pub fn network<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network(Box::new(err))
    }

    pub fn decode<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode(Box::new(err))
    }

    /// HTTP status carried by this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Decode(_) => ErrorCode::Unknown,
            _ => ErrorCode::IoError,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
