//! I/O: the HTTP capability and the streaming downloader built on it.

mod downloader;
mod http;

pub use downloader::{DownloadStream, Downloader};
pub use http::{BoxStream, HttpClient, HttpResponse};
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
