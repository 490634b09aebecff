/// Default upper bound for a single written chunk, in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// What to do with a partially written destination when a download fails.
///
/// Cancelling a download (dropping its stream) never deletes anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartialFile {
    #[default]
    Remove,
    Keep,
}

/// Configuration for a [`Downloader`](crate::Downloader).
///
/// # Examples
///
/// ```
/// use portkit_fetch::{DownloadOptions, PartialFile};
///
/// let options = DownloadOptions::default()
///     .chunk_size(16 * 1024)
///     .header("Authorization", "Bearer token")
///     .partial_file(PartialFile::Keep);
/// assert_eq!(options.chunk_size, 16 * 1024);
/// ```
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Upper bound for each write and each `Downloading` event.
    pub chunk_size: usize,

    /// Extra headers sent with the GET request.
    pub headers: Vec<(String, String)>,

    pub partial_file: PartialFile,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            chunk_size:   DEFAULT_CHUNK_SIZE,
            headers:      Vec::new(),
            partial_file: PartialFile::default(),
        }
    }
}

impl DownloadOptions {
    /// Set the chunk bound. Zero is treated as one byte.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn partial_file(mut self, partial_file: PartialFile) -> Self {
        self.partial_file = partial_file;
        self
    }
}
