use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use futures_util::{StreamExt, stream};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::core::is_success;
use crate::data::{DownloadOptions, DownloadStatus, PartialFile};
use crate::effects::http::{BoxStream, HttpClient};
use crate::error::{FetchError, Result};

/// Lazy, finite, non-restartable sequence of download events.
pub type DownloadStream = BoxStream<'static, DownloadStatus>;

/// Streams HTTP responses to disk and reports progress as a [`DownloadStream`].
pub struct Downloader<C: HttpClient> {
    client:  Arc<C>,
    options: DownloadOptions,
}

impl<C: HttpClient + 'static> Downloader<C> {
    pub fn new(client: C) -> Self { Self::from_shared(Arc::new(client)) }

    /// Build a downloader over a client that is also used elsewhere.
    pub fn from_shared(client: Arc<C>) -> Self {
        Self {
            client,
            options: DownloadOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DownloadOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &DownloadOptions { &self.options }

    /// Download `url` into `destination`.
    ///
    /// Nothing happens until the returned stream is polled. The first event
    /// is always [`DownloadStatus::Pending`], the last is either
    /// [`DownloadStatus::Completed`] or [`DownloadStatus::Error`]. Dropping
    /// the stream early closes the connection and the destination file.
    pub fn download(&self, url: impl Into<String>, destination: impl Into<PathBuf>) -> DownloadStream {
        let request = Request {
            client:      Arc::clone(&self.client),
            url:         url.into(),
            destination: destination.into(),
            options:     self.options.clone(),
        };
        Box::pin(stream::unfold(Step::Start(request), Step::advance))
    }
}

enum Step<C: HttpClient> {
    Start(Request<C>),
    Connect(Request<C>),
    Transfer(Transfer<C>),
    Done,
}

impl<C: HttpClient> Step<C> {
    async fn advance(self) -> Option<(DownloadStatus, Self)> {
        match self {
            Step::Start(request) => Some((DownloadStatus::Pending, Step::Connect(request))),
            Step::Connect(request) => match request.open().await {
                Ok(transfer) => Some(transfer.advance().await),
                Err(err) => {
                    warn!(url = %request.url, error = %err, "download failed");
                    Some((DownloadStatus::failed(err), Step::Done))
                }
            },
            Step::Transfer(transfer) => Some(transfer.advance().await),
            Step::Done => None,
        }
    }
}

struct Request<C: HttpClient> {
    client:      Arc<C>,
    url:         String,
    destination: PathBuf,
    options:     DownloadOptions,
}

impl<C: HttpClient> Request<C> {
    async fn open(&self) -> Result<Transfer<C>> {
        debug!(url = %self.url, path = %self.destination.display(), "starting download");

        let response = self
            .client
            .get(&self.url, &self.options.headers)
            .await
            .map_err(FetchError::network)?;

        if !is_success(response.status) {
            return Err(FetchError::Status {
                status: response.status,
                url:    self.url.clone(),
            });
        }

        create_parent(&self.destination).await?;
        let file = File::create(&self.destination)
            .await
            .map_err(|source| FetchError::Write {
                path: self.destination.clone(),
                source,
            })?;

        Ok(Transfer {
            body: response.body,
            file,
            url: self.url.clone(),
            path: self.destination.clone(),
            pending: Bytes::new(),
            bytes_downloaded: 0,
            total_bytes: response.content_length,
            chunk_size: self.options.chunk_size.max(1),
            partial_file: self.options.partial_file,
        })
    }
}

async fn create_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| FetchError::CreateDir {
                path: parent.to_path_buf(),
                source,
            }),
        _ => Ok(()),
    }
}

/// An open body stream and destination file; both are released when dropped.
struct Transfer<C: HttpClient> {
    body:             BoxStream<'static, std::result::Result<Bytes, C::Error>>,
    file:             File,
    url:              String,
    path:             PathBuf,
    // bytes received but not yet written, when a frame exceeds `chunk_size`
    pending:          Bytes,
    bytes_downloaded: u64,
    total_bytes:      Option<u64>,
    chunk_size:       usize,
    partial_file:     PartialFile,
}

impl<C: HttpClient> Transfer<C> {
    async fn advance(mut self) -> (DownloadStatus, Step<C>) {
        match self.write_next_chunk().await {
            Ok(true) => {
                let status = DownloadStatus::downloading(self.bytes_downloaded, self.total_bytes);
                (status, Step::Transfer(self))
            }
            Ok(false) => match self.finish().await {
                Ok(()) => {
                    info!(
                        url = %self.url,
                        path = %self.path.display(),
                        bytes = self.bytes_downloaded,
                        "download completed"
                    );
                    let Transfer { path, .. } = self;
                    (DownloadStatus::Completed { path }, Step::Done)
                }
                Err(err) => (self.abandon(err).await, Step::Done),
            },
            Err(err) => (self.abandon(err).await, Step::Done),
        }
    }

    /// Write at most one chunk. Returns `false` once the body is exhausted.
    async fn write_next_chunk(&mut self) -> Result<bool> {
        while self.pending.is_empty() {
            match self.body.next().await {
                Some(frame) => self.pending = frame.map_err(FetchError::network)?,
                None => return Ok(false),
            }
        }

        let len = self.pending.len().min(self.chunk_size);
        let chunk = self.pending.split_to(len);
        let map = |source| FetchError::Write {
            path: self.path.clone(),
            source,
        };
        self.file.write_all(&chunk).await.map_err(map)?;
        // no write is left in flight once the chunk is reported
        self.file.flush().await.map_err(map)?;
        self.bytes_downloaded += len as u64;
        Ok(true)
    }

    async fn finish(&mut self) -> Result<()> {
        let map = |source| FetchError::Write {
            path: self.path.clone(),
            source,
        };
        self.file.flush().await.map_err(map)?;
        self.file.sync_all().await.map_err(map)
    }

    async fn abandon(self, err: FetchError) -> DownloadStatus {
        warn!(url = %self.url, bytes = self.bytes_downloaded, error = %err, "download failed");

        let Transfer {
            body,
            mut file,
            path,
            partial_file,
            ..
        } = self;
        drop(body);
        // let in-flight writes settle before the handle goes away
        let _ = file.flush().await;
        drop(file);

        if partial_file == PartialFile::Remove
            && let Err(e) = tokio::fs::remove_file(&path).await
        {
            warn!(path = %path.display(), error = %e, "failed to remove partial download");
        }

        DownloadStatus::failed(err)
    }
}
