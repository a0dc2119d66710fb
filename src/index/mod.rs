//! Collateral adjective index construction.
//!
//! [`IndexBuilder`] drives the whole pipeline: fetch the list page, copy out
//! the animal table rows, split each name cell and adjective cell, resolve
//! info box images when asked to, and finally hand the collected image links
//! to the download pool.
//!
//! # Example
//!
//! ```no_run
//! use bestiary_core::download::{Fetcher, HttpClient, RetryPolicy};
//! use bestiary_core::index::{IndexBuilder, PipelineConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = Fetcher::http(HttpClient::new(), RetryPolicy::default());
//! let index = IndexBuilder::new(PipelineConfig::default(), fetcher).build().await?;
//! for (adjective, entries) in &index.adjectives {
//!     println!("{adjective}: {} entries", entries.len());
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
mod config;
mod error;
mod html;
mod model;

pub use builder::IndexBuilder;
pub use config::{DEFAULT_DOWNLOAD_DIR, DEFAULT_SOURCE_URL, PipelineConfig};
pub use error::IndexError;
pub use html::render_html;
pub use model::{AdjectiveIndex, AnimalIndex, AnimalRecord, IndexEntry, SynonymMap};
