use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed, sendable stream.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Response head plus the still-unread body.
pub struct HttpResponse<E> {
    pub status:         u16,
    /// Declared `Content-Length`; `None` for chunked or unspecified bodies.
    pub content_length: Option<u64>,
    pub body:           BoxStream<'static, Result<Bytes, E>>,
}

/// Asynchronous HTTP client abstraction.
///
/// This is the minimal capability the downloader needs. Implementations own
/// their redirect and TLS configuration; a non-2xx response is *not* an error
/// at this level, the downloader inspects [`HttpResponse::status`] itself.
///
/// # Implementations
///
/// - [`ReqwestClient`](crate::ReqwestClient): production implementation using `reqwest`
/// - Mock implementations for testing
pub trait HttpClient: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Issue a GET request and return the response without reading the body.
    fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> impl Future<Output = Result<HttpResponse<Self::Error>, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use tracing::debug;

    use super::*;
    use crate::core::is_success;
    use crate::error::{FetchError, Result};

    /// Production HTTP client backed by a shared `reqwest::Client`.
    ///
    /// Besides serving downloads it offers small JSON helpers, so one
    /// connection pool can be used for API calls and file transfers alike.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        pub fn new() -> Self { Self::default() }

        pub fn with_client(client: reqwest::Client) -> Self { Self { client } }

        /// The underlying client, for requests the helpers do not cover.
        pub fn inner(&self) -> &reqwest::Client { &self.client }

        /// GET `url` with the given query pairs and decode a JSON body.
        pub async fn get_json<T: DeserializeOwned>(
            &self,
            url: &str,
            query: &[(&str, &str)],
        ) -> Result<T> {
            debug!(url = %url, "GET json");
            let response = self
                .client
                .get(url)
                .query(query)
                .send()
                .await
                .map_err(FetchError::network)?;
            decode(url, response).await
        }

        /// POST an optional JSON body to `url` and decode a JSON reply.
        ///
        /// `Content-Type: application/json` is sent even without a body.
        pub async fn post_json<T, B>(&self, url: &str, body: Option<&B>) -> Result<T>
        where
            T: DeserializeOwned,
            B: Serialize + ?Sized,
        {
            debug!(url = %url, "POST json");
            let mut request = self
                .client
                .post(url)
                .header(reqwest::header::CONTENT_TYPE, "application/json");
            if let Some(body) = body {
                request = request.json(body);
            }
            let response = request.send().await.map_err(FetchError::network)?;
            decode(url, response).await
        }
    }

    async fn decode<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> Result<T> {
        let status = response.status().as_u16();
        if !is_success(status) {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }
        response.json::<T>().await.map_err(FetchError::decode)
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(
            &self,
            url: &str,
            headers: &[(String, String)],
        ) -> std::result::Result<HttpResponse<Self::Error>, Self::Error> {
            let mut request = self.client.get(url);

            for (key, value) in headers {
                request = request.header(key, value);
            }

            let response = request.send().await?;
            Ok(HttpResponse {
                status:         response.status().as_u16(),
                content_length: response.content_length(),
                body:           Box::pin(response.bytes_stream()),
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
