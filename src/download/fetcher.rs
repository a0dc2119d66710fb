//! Retrying fetch shared by every network call site.
//!
//! [`Fetcher`] wraps a [`Transport`] (the raw single-attempt GET) with the
//! timeout retry loop described by a [`RetryPolicy`]. The page fetch, the
//! info box fetch, and the image downloads all go through one `Fetcher`.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use super::error::FetchError;
use super::retry::{FailureType, RetryDecision, RetryPolicy, classify_error};
use super::HttpClient;

/// A single-attempt GET.
///
/// Implemented by [`HttpClient`]; tests substitute scripted transports.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches `url` once, returning the response body.
    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// GET with a bounded, fixed-wait retry on timeouts.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct Fetcher {
    transport: Arc<dyn Transport>,
    policy: RetryPolicy,
}

impl fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetcher")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Fetcher {
    /// Creates a fetcher over an arbitrary transport.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// Creates a fetcher over the reqwest-backed [`HttpClient`].
    #[must_use]
    pub fn http(client: HttpClient, policy: RetryPolicy) -> Self {
        Self::new(Arc::new(client), policy)
    }

    /// Fetches `url`, retrying timeouts according to the policy.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Timeout`] (the first timeout seen) once retries are exhausted
    /// - [`FetchError::BadUrl`], [`FetchError::InvalidUrl`], [`FetchError::HttpStatus`]
    ///   and [`FetchError::Network`] immediately, from whichever attempt hit them
    #[instrument(skip(self), fields(max_retries = self.policy.max_retries()))]
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut retries_done = 0u32;
        let mut first_timeout: Option<FetchError> = None;

        loop {
            debug!(attempt = retries_done + 1, "fetching");

            let error = match self.transport.get(url).await {
                Ok(body) => {
                    if retries_done > 0 {
                        info!(retries = retries_done, "fetch succeeded after retry");
                    }
                    return Ok(body);
                }
                Err(error) => error,
            };

            let failure_type = classify_error(&error);
            match self.policy.should_retry(failure_type, retries_done) {
                RetryDecision::Retry { delay, attempt } => {
                    info!(
                        attempt,
                        max_retries = self.policy.max_retries(),
                        delay_ms = delay.as_millis(),
                        error = %error,
                        "retrying fetch"
                    );
                    first_timeout.get_or_insert(error);
                    tokio::time::sleep(delay).await;
                    retries_done = attempt;
                }
                RetryDecision::DoNotRetry { reason } => {
                    warn!(error = %error, %reason, "fetch failed");
                    return Err(match failure_type {
                        FailureType::Transient => first_timeout.unwrap_or(error),
                        FailureType::Permanent => error,
                    });
                }
            }
        }
    }
}
