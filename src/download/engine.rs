//! Download engine for concurrent image downloads with per-item isolation.
//!
//! This module provides the `DownloadEngine` which fetches a table of
//! `name -> image URL` pairs using a semaphore-bounded pool of Tokio tasks.
//! Every item is independent: a failed fetch or write is logged, counted, and
//! never reaches sibling tasks or the caller.
//!
//! # Example
//!
//! ```no_run
//! use bestiary_core::download::{DownloadEngine, Fetcher, HttpClient, RetryPolicy};
//! use indexmap::IndexMap;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = DownloadEngine::new(12)?;
//! let fetcher = Fetcher::http(HttpClient::new(), RetryPolicy::default());
//! let mut links = IndexMap::new();
//! links.insert("Lion".to_string(), "https://upload.wikimedia.org/lion.jpg".to_string());
//! let stats = engine.download_all(&fetcher, &links, Path::new("tmp")).await;
//! println!("Completed: {}, Failed: {}", stats.completed(), stats.failed());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use indexmap::IndexMap;
use serde::Serialize;
use tokio::sync::Semaphore;
use tracing::{debug, info, instrument, warn};

use super::Fetcher;
use super::constants::DEFAULT_DOWNLOAD_WORKERS;
use super::error::ImageFetchError;

/// Minimum allowed concurrency value.
const MIN_CONCURRENCY: usize = 1;

/// Maximum allowed concurrency value.
const MAX_CONCURRENCY: usize = 100;

/// Default concurrency if not specified.
pub const DEFAULT_CONCURRENCY: usize = DEFAULT_DOWNLOAD_WORKERS;

/// Extension given to every downloaded image, whatever its real format.
const IMAGE_EXTENSION: &str = "png";

/// Error type for download engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Invalid concurrency value provided.
    #[error(
        "invalid concurrency value {value}: must be between {MIN_CONCURRENCY} and {MAX_CONCURRENCY}"
    )]
    InvalidConcurrency {
        /// The invalid value that was provided.
        value: usize,
    },
}

/// Statistics from a download batch run.
///
/// Uses atomic counters for updates from concurrent download tasks.
#[derive(Debug, Default)]
pub struct DownloadStats {
    completed: AtomicUsize,
    failed: AtomicUsize,
    skipped: AtomicUsize,
}

impl DownloadStats {
    /// Creates a new stats tracker with zero counts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of images written to disk.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    /// Returns the number of items whose fetch or write failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::SeqCst)
    }

    /// Returns the number of items skipped for lack of a URL.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped.load(Ordering::SeqCst)
    }

    /// Returns the total number of items seen.
    #[must_use]
    pub fn total(&self) -> usize {
        self.completed() + self.failed() + self.skipped()
    }

    fn increment_completed(&self) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }

    fn increment_failed(&self) {
        self.failed.fetch_add(1, Ordering::SeqCst);
    }

    fn increment_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::SeqCst);
    }

    fn snapshot(&self) -> Self {
        let copy = Self::new();
        copy.completed.store(self.completed(), Ordering::SeqCst);
        copy.failed.store(self.failed(), Ordering::SeqCst);
        copy.skipped.store(self.skipped(), Ordering::SeqCst);
        copy
    }
}

impl Serialize for DownloadStats {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("DownloadStats", 3)?;
        state.serialize_field("completed", &self.completed())?;
        state.serialize_field("failed", &self.failed())?;
        state.serialize_field("skipped", &self.skipped())?;
        state.end()
    }
}

/// Returns the file an image for `name` is written to under `dir`.
#[must_use]
pub fn image_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{IMAGE_EXTENSION}"))
}

/// Download engine for concurrent, isolated image downloads.
///
/// # Concurrency Model
///
/// - Each image runs in its own Tokio task
/// - A semaphore permit is acquired before spawning each task
/// - Permits are released automatically when tasks complete (RAII)
/// - Tasks own only plain values (name, URL, path) and a `Fetcher` clone
#[derive(Debug)]
pub struct DownloadEngine {
    semaphore: Arc<Semaphore>,
    concurrency: usize,
}

impl DownloadEngine {
    /// Creates a new engine with the given worker pool size.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConcurrency`] if the value is outside
    /// the valid range (1-100).
    #[instrument(level = "debug")]
    pub fn new(concurrency: usize) -> Result<Self, EngineError> {
        if !(MIN_CONCURRENCY..=MAX_CONCURRENCY).contains(&concurrency) {
            return Err(EngineError::InvalidConcurrency { value: concurrency });
        }

        debug!(concurrency, "creating download engine");

        Ok(Self {
            semaphore: Arc::new(Semaphore::new(concurrency)),
            concurrency,
        })
    }

    /// Returns the configured concurrency limit.
    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Downloads every image in `links` into `output_dir` as `<name>.png`.
    ///
    /// Items with an empty URL are skipped. Returns once every item has been
    /// attempted. Individual failures never cause this method to error; they
    /// are logged and counted in the returned stats.
    #[instrument(skip(self, fetcher, links), fields(items = links.len(), output_dir = %output_dir.display()))]
    pub async fn download_all(
        &self,
        fetcher: &Fetcher,
        links: &IndexMap<String, String>,
        output_dir: &Path,
    ) -> DownloadStats {
        let stats = Arc::new(DownloadStats::new());
        let mut handles = Vec::with_capacity(links.len());

        info!("starting image downloads");

        if let Err(e) = tokio::fs::create_dir_all(output_dir).await {
            warn!(error = %e, "failed to create download directory");
        }

        for (name, url) in links {
            if url.is_empty() {
                debug!(%name, "no image URL, skipping");
                stats.increment_skipped();
                continue;
            }

            // Acquire semaphore permit (blocks if at concurrency limit). The
            // semaphore is owned by `self` and never closed.
            let Ok(permit) = self.semaphore.clone().acquire_owned().await else {
                warn!(%name, "download semaphore closed, abandoning item");
                stats.increment_failed();
                continue;
            };

            let fetcher = fetcher.clone();
            let stats = Arc::clone(&stats);
            let name = name.clone();
            let url = url.clone();
            let path = image_path(output_dir, &name);

            handles.push(tokio::spawn(async move {
                let _permit = permit;

                match download_one(&fetcher, &name, &url, &path).await {
                    Ok(bytes) => {
                        debug!(%name, path = %path.display(), bytes, "image saved");
                        stats.increment_completed();
                    }
                    Err(e) => {
                        warn!(%name, %url, error = %e, "image download failed");
                        stats.increment_failed();
                    }
                }
            }));
        }

        debug!(task_count = handles.len(), "waiting for downloads to complete");

        for handle in handles {
            // A panicking task is counted as failed; siblings are unaffected.
            if let Err(e) = handle.await {
                warn!(error = %e, "download task panicked");
                stats.increment_failed();
            }
        }

        info!(
            completed = stats.completed(),
            failed = stats.failed(),
            skipped = stats.skipped(),
            "image downloads complete"
        );

        match Arc::try_unwrap(stats) {
            Ok(stats) => stats,
            Err(shared) => shared.snapshot(),
        }
    }
}

/// Fetches one image and writes it to `path`, returning the byte count.
async fn download_one(
    fetcher: &Fetcher,
    name: &str,
    url: &str,
    path: &Path,
) -> Result<usize, ImageFetchError> {
    let bytes = fetcher
        .fetch(url)
        .await
        .map_err(|e| ImageFetchError::fetch(name, e))?;
    tokio::fs::write(path, &bytes)
        .await
        .map_err(|e| ImageFetchError::io(name, path, e))?;
    Ok(bytes.len())
}
