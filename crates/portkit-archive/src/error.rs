use std::io;
use std::path::PathBuf;

use portkit_fs::{ErrorCode, FileError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ZIP extraction is not supported on this platform")]
    UnsupportedPlatform,

    #[error("ZIP file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read ZIP file: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("archive is corrupted: {0}")]
    Corrupted(String),

    #[error("entry '{0}' resolves outside the output directory")]
    UnsafeEntry(String),

    #[error("failed to extract '{path}': {source}")]
    ExtractionFailed { path: PathBuf, source: io::Error },

    #[error("failed to create directory: {path}: {source}")]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedPlatform => ErrorCode::UnsupportedPlatform,
            Self::NotFound(_) => ErrorCode::FileNotFound,
            Self::PermissionDenied(_) => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        }
    }
}

impl From<Error> for FileError {
    fn from(e: Error) -> Self {
        let message = match e.code() {
            ErrorCode::IoError => format!("failed to unzip: {e}"),
            _ => e.to_string(),
        };
        FileError::new(e.code(), message)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
