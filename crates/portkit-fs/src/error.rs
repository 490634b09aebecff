use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Machine-matchable failure category shared by every portkit operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// File or directory does not exist.
    FileNotFound,
    PermissionDenied,
    /// The operation is not available on this platform or build.
    UnsupportedPlatform,
    IoError,
    #[default]
    Unknown,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::FileNotFound => "FILE_NOT_FOUND",
            ErrorCode::PermissionDenied => "PERMISSION_DENIED",
            ErrorCode::UnsupportedPlatform => "UNSUPPORTED_PLATFORM",
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Error half of [`FileResult`]: a human-readable message plus an [`ErrorCode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FileError {
    pub code:    ErrorCode,
    pub message: String,
}

impl FileError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(what: &str, path: &Path) -> Self {
        Self::new(
            ErrorCode::FileNotFound,
            format!("{what} does not exist: {}", path.display()),
        )
    }

    pub fn unsupported(operation: &str) -> Self {
        Self::new(
            ErrorCode::UnsupportedPlatform,
            format!("{operation} is not supported on this platform"),
        )
    }

    /// Wrap any failure as `IO_ERROR`, keeping the underlying message.
    pub fn io(context: &str, err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::IoError, format!("{context}: {err}"))
    }

    pub fn code(&self) -> ErrorCode { self.code }

    pub fn message(&self) -> &str { &self.message }
}

/// Success payload XOR error payload.
pub type FileResult<T> = std::result::Result<T, FileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_serializes_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::UnsupportedPlatform).unwrap();
        assert_eq!(json, "\"UNSUPPORTED_PLATFORM\"");

        let code: ErrorCode = serde_json::from_str("\"FILE_NOT_FOUND\"").unwrap();
        assert_eq!(code, ErrorCode::FileNotFound);
    }

    #[test]
    fn error_code_display_matches_serde() {
        for code in [
            ErrorCode::FileNotFound,
            ErrorCode::PermissionDenied,
            ErrorCode::UnsupportedPlatform,
            ErrorCode::IoError,
            ErrorCode::Unknown,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json.trim_matches('"'), code.to_string());
        }
    }

    #[test]
    fn io_error_keeps_underlying_message() {
        let source = std::io::Error::other("disk on fire");
        let err = FileError::io("failed to copy file", source);
        assert_eq!(err.code(), ErrorCode::IoError);
        assert_eq!(err.to_string(), "failed to copy file: disk on fire");
    }

    #[test]
    fn not_found_names_the_path() {
        let err = FileError::not_found("source file", Path::new("missing.txt"));
        assert_eq!(err.code, ErrorCode::FileNotFound);
        assert!(err.message().contains("missing.txt"));
    }

    #[test]
    fn default_code_is_unknown() {
        assert_eq!(ErrorCode::default(), ErrorCode::Unknown);
    }
}
