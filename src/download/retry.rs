//! Retry logic with a fixed wait for timed-out requests.
//!
//! This module provides the [`RetryPolicy`] and [`FailureType`] types for
//! classifying fetch errors and determining retry behavior.
//!
//! # Overview
//!
//! When a fetch fails, the error is classified into a [`FailureType`]:
//! - [`FailureType::Transient`] - a timeout; another attempt may succeed
//! - [`FailureType::Permanent`] - everything else; retrying cannot help
//!
//! The [`RetryPolicy`] then decides, from the failure type and the number of
//! retries already made, whether to wait and try again.
//!
//! # Example
//!
//! ```
//! use bestiary_core::download::{FetchError, RetryDecision, RetryPolicy, classify_error};
//!
//! let policy = RetryPolicy::default();
//! let error = FetchError::timeout("https://example.com/page");
//!
//! match policy.should_retry(classify_error(&error), 0) {
//!     RetryDecision::Retry { delay, attempt } => {
//!         println!("Retry {attempt} in {delay:?}");
//!     }
//!     RetryDecision::DoNotRetry { reason } => {
//!         println!("Not retrying: {reason}");
//!     }
//! }
//! ```

use std::time::Duration;

use tracing::debug;

use super::FetchError;
use super::constants::{REQUEST_RETRIES_NUM, REQUEST_RETRY_WAIT_TIME};

/// Classification of fetch failure types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureType {
    /// Temporary failure that may succeed on retry (timeouts only).
    Transient,

    /// Failure that won't succeed regardless of retries.
    ///
    /// Examples: 404 Not Found, too many redirects, connection refused.
    Permanent,
}

/// Decision on whether to retry a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryDecision {
    /// Retry the fetch after the specified delay.
    Retry {
        /// How long to wait before retrying.
        delay: Duration,
        /// Which retry this will be (1-indexed, not counting the initial attempt).
        attempt: u32,
    },

    /// Do not retry the fetch.
    DoNotRetry {
        /// Human-readable reason why retry is not attempted.
        reason: String,
    },
}

/// Configuration for the timeout retry loop.
///
/// # Default Values
///
/// - `max_retries`: 10 (so at most 11 attempts in total)
/// - `wait`: 2 seconds before every retry
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt.
    max_retries: u32,

    /// Fixed wait before each retry.
    wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: REQUEST_RETRIES_NUM,
            wait: REQUEST_RETRY_WAIT_TIME,
        }
    }
}

impl RetryPolicy {
    /// Creates a new retry policy.
    #[must_use]
    pub fn new(max_retries: u32, wait: Duration) -> Self {
        Self { max_retries, wait }
    }

    /// Creates a policy that never retries.
    #[must_use]
    pub fn no_retry() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Returns the maximum number of retries configured.
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the wait applied before each retry.
    #[must_use]
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Determines whether to retry a failed fetch.
    ///
    /// `retries_done` is the number of retries already made (0 after the
    /// initial attempt fails).
    pub fn should_retry(&self, failure_type: FailureType, retries_done: u32) -> RetryDecision {
        if failure_type == FailureType::Permanent {
            return RetryDecision::DoNotRetry {
                reason: "permanent failure - retry would not help".to_string(),
            };
        }

        if retries_done >= self.max_retries {
            debug!(retries_done, max = self.max_retries, "max retries reached");
            return RetryDecision::DoNotRetry {
                reason: format!("max retries ({}) exhausted", self.max_retries),
            };
        }

        RetryDecision::Retry {
            delay: self.wait,
            attempt: retries_done + 1,
        }
    }
}

/// Classifies a fetch error into a failure type for retry decisions.
///
/// | Error | Type | Rationale |
/// |-------|------|-----------|
/// | Timeout | Transient | Server may answer next time |
/// | BadUrl | Permanent | Redirect loop, URL presumed malformed |
/// | InvalidUrl | Permanent | Won't parse next time either |
/// | HttpStatus | Permanent | Status errors are surfaced, not retried |
/// | Network | Permanent | Surfaced unchanged |
#[must_use]
pub fn classify_error(error: &FetchError) -> FailureType {
    match error {
        FetchError::Timeout { .. } => FailureType::Transient,
        FetchError::BadUrl { .. }
        | FetchError::InvalidUrl { .. }
        | FetchError::HttpStatus { .. }
        | FetchError::Network { .. } => FailureType::Permanent,
    }
}
