//! Plain data types: download configuration and the status events.

pub mod options;
pub mod status;

pub use options::{DEFAULT_CHUNK_SIZE, DownloadOptions, PartialFile};
pub use status::{Cause, DownloadStatus};
