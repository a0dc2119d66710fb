//! HTTP client wrapper used as the production [`Transport`].
//!
//! This module provides the `HttpClient` struct which issues single GET
//! requests with timeout configuration and maps reqwest failures onto
//! [`FetchError`] variants. Retrying is not done here; see
//! [`Fetcher`](super::Fetcher).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use super::constants::{CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS};
use super::error::FetchError;
use super::fetcher::Transport;
use crate::user_agent;

/// HTTP client for single GET requests.
///
/// Create once and share (it is cheap to clone); the underlying reqwest
/// client pools connections.
///
/// # Example
///
/// ```no_run
/// use bestiary_core::download::{HttpClient, Transport};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HttpClient::new();
/// let body = client.get("https://en.wikipedia.org/wiki/Lion").await?;
/// println!("{} bytes", body.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Creates a new HTTP client with default timeouts.
    ///
    /// Default configuration:
    /// - Connect timeout: 10 seconds
    /// - Request timeout: 30 seconds
    /// - Gzip decompression: enabled
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::new_with_timeouts(CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS)
    }

    /// Creates a new HTTP client with explicit timeout values.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// timeout configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new_with_timeouts(connect_timeout_secs: u64, request_timeout_secs: u64) -> Self {
        Self::with_timeout_durations(
            Duration::from_secs(connect_timeout_secs),
            Duration::from_secs(request_timeout_secs),
        )
        .expect("failed to build HTTP client with static configuration")
    }

    /// Creates a new HTTP client from timeout durations.
    ///
    /// # Errors
    ///
    /// Returns the reqwest builder error if the client cannot be constructed
    /// (for example when the TLS backend fails to initialize).
    pub fn with_timeout_durations(
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .gzip(true)
            .user_agent(user_agent::default_user_agent())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpClient {
    #[instrument(level = "debug", skip(self))]
    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        Url::parse(url).map_err(|_| FetchError::invalid_url(url))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| map_transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(url, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| map_transport_error(url, e))?;
        debug!(bytes = body.len(), "response received");
        Ok(body.to_vec())
    }
}

/// Maps a reqwest error onto the fetch taxonomy.
///
/// Connect timeouts and whole-request timeouts both map to
/// [`FetchError::Timeout`]. Timeouts are checked first: a connect timeout is
/// also a connect error.
fn map_transport_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::timeout(url)
    } else if error.is_redirect() {
        FetchError::bad_url(url)
    } else {
        FetchError::network(url, error)
    }
}
