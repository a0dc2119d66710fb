//! HTTP fetching and concurrent image downloads.
//!
//! # Features
//!
//! - One [`Fetcher`] for every network call, retrying timeouts with a fixed wait
//! - Structured error types with full context
//! - [`DownloadEngine`]: semaphore-bounded worker pool with per-item isolation
//!
//! # Example
//!
//! ```no_run
//! use bestiary_core::download::{Fetcher, HttpClient, RetryPolicy};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = Fetcher::http(HttpClient::new(), RetryPolicy::default());
//! let page = fetcher
//!     .fetch("https://en.wikipedia.org/wiki/List_of_animal_names")
//!     .await?;
//! println!("{} bytes", page.len());
//! # Ok(())
//! # }
//! ```

mod client;
pub mod constants;
mod engine;
mod error;
mod fetcher;
mod retry;

pub use client::HttpClient;
pub use engine::{DEFAULT_CONCURRENCY, DownloadEngine, DownloadStats, EngineError, image_path};
pub use error::{FetchError, ImageFetchError};
pub use fetcher::{Fetcher, Transport};
pub use retry::{FailureType, RetryDecision, RetryPolicy, classify_error};
