//! Error types for the download module.
//!
//! [`FetchError`] covers a single HTTP GET through the [`Fetcher`](super::Fetcher);
//! [`ImageFetchError`] covers one image download task, which can additionally
//! fail while writing the file.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching a URL.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server redirected too many times; the URL is presumed malformed.
    #[error("bad URL (too many redirects): {url}")]
    BadUrl {
        /// The URL that was requested.
        url: String,
    },

    /// The provided URL could not be parsed.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The invalid URL string.
        url: String,
    },

    /// Request timed out before completion.
    #[error("timeout fetching {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// Non-2xx HTTP response.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Any other network-level error (DNS, connection refused, TLS, body read).
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The URL that failed.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Creates a bad URL error.
    pub fn bad_url(url: impl Into<String>) -> Self {
        Self::BadUrl { url: url.into() }
    }

    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Returns the URL the failed request targeted.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::BadUrl { url }
            | Self::InvalidUrl { url }
            | Self::Timeout { url }
            | Self::HttpStatus { url, .. }
            | Self::Network { url, .. } => url,
        }
    }
}

/// Errors from a single image download task. Never fatal to the run.
#[derive(Debug, Error)]
pub enum ImageFetchError {
    /// The image bytes could not be fetched.
    #[error("failed to fetch image for {name}: {source}")]
    Fetch {
        /// Canonical animal name.
        name: String,
        /// The underlying fetch error.
        #[source]
        source: FetchError,
    },

    /// The image bytes could not be written.
    #[error("IO error writing image for {name} to {path}: {source}")]
    Io {
        /// Canonical animal name.
        name: String,
        /// Target file path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl ImageFetchError {
    /// Creates a fetch failure for `name`.
    pub fn fetch(name: impl Into<String>, source: FetchError) -> Self {
        Self::Fetch {
            name: name.into(),
            source,
        }
    }

    /// Creates an IO failure for `name`.
    pub fn io(name: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            name: name.into(),
            path: path.into(),
            source,
        }
    }
}

// No `From<reqwest::Error>` / `From<std::io::Error>`: every variant needs the
// url, name or path that the source error does not carry.
