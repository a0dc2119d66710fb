//! Pipeline run settings.

use std::path::PathBuf;

use url::Url;

use crate::download::DEFAULT_CONCURRENCY;
use crate::parser::AdjectivePolicy;

/// Page the index is built from unless configured otherwise.
pub const DEFAULT_SOURCE_URL: &str = "https://en.wikipedia.org/wiki/List_of_animal_names";

/// Directory images are written to unless configured otherwise.
pub const DEFAULT_DOWNLOAD_DIR: &str = "tmp";

/// Settings for one [`IndexBuilder`](super::IndexBuilder) run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Page holding the animal table.
    pub source_url: String,
    /// Resolve info box images and download them.
    pub download_images: bool,
    /// Where downloaded images go.
    pub download_dir: PathBuf,
    /// Adjective token filtering.
    pub adjective_policy: AdjectivePolicy,
    /// Base article links are joined onto. `None` uses the source URL.
    pub site_base: Option<Url>,
    /// Image download pool size.
    pub download_workers: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            download_images: false,
            download_dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
            adjective_policy: AdjectivePolicy::default(),
            site_base: None,
            download_workers: DEFAULT_CONCURRENCY,
        }
    }
}

impl PipelineConfig {
    /// Creates a config for `source_url` with every other setting defaulted.
    #[must_use]
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            ..Self::default()
        }
    }

    /// Enables image downloads into `download_dir`.
    #[must_use]
    pub fn with_images(mut self, download_dir: impl Into<PathBuf>) -> Self {
        self.download_images = true;
        self.download_dir = download_dir.into();
        self
    }

    /// Sets the adjective token policy.
    #[must_use]
    pub fn with_adjective_policy(mut self, policy: AdjectivePolicy) -> Self {
        self.adjective_policy = policy;
        self
    }

    /// Sets the image download pool size.
    #[must_use]
    pub fn with_download_workers(mut self, workers: usize) -> Self {
        self.download_workers = workers;
        self
    }
}
