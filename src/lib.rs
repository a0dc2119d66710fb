//! Bestiary Core Library
//!
//! This library builds an index of animals grouped by their collateral
//! adjectives ("leonine", "bovine") from the animal names table on Wikipedia,
//! and optionally downloads a representative picture of each animal.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`download`] - Retrying fetcher and concurrent image download engine
//! - [`parser`] - Table lookup, name disambiguation, adjective tokenization
//! - [`resolver`] - Info box image resolution for a single article
//! - [`index`] - Pipeline orchestration and the resulting index types

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod download;
pub mod index;
pub mod parser;
pub mod resolver;

mod user_agent;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use download::{
    DEFAULT_CONCURRENCY, DownloadEngine, DownloadStats, EngineError, FailureType, FetchError,
    Fetcher, HttpClient, RetryDecision, RetryPolicy, classify_error,
};
pub use index::{AnimalIndex, IndexBuilder, IndexEntry, IndexError, PipelineConfig};
pub use parser::{AdjectivePolicy, ParseError, parse_name, tokenize_adjectives};
pub use resolver::{ImageLinkResolver, ImageResolutionFailure};
