//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use bestiary_core::download::constants::{REQUEST_RETRIES_NUM, REQUEST_RETRY_WAIT_TIME};
use bestiary_core::index::{DEFAULT_DOWNLOAD_DIR, DEFAULT_SOURCE_URL};
use bestiary_core::DEFAULT_CONCURRENCY;

/// Index animals by their collateral adjectives.
///
/// Bestiary reads the animal names table from Wikipedia, groups every animal
/// under its collateral adjectives ("leonine", "bovine"), and prints the
/// result as JSON. Optionally downloads a picture of each animal.
#[derive(Parser, Debug)]
#[command(name = "bestiary")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Page holding the animal names table
    #[arg(long, default_value = DEFAULT_SOURCE_URL)]
    pub url: String,

    /// Resolve and download a picture for every animal
    #[arg(long)]
    pub download_images: bool,

    /// Directory downloaded pictures are written to
    #[arg(long, default_value = DEFAULT_DOWNLOAD_DIR)]
    pub download_dir: PathBuf,

    /// Keep "?" entries for animals whose adjective is unknown
    #[arg(long)]
    pub allow_unknown: bool,

    /// Maximum concurrent image downloads (1-100)
    #[arg(short = 'c', long, default_value_t = DEFAULT_CONCURRENCY as u8, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub concurrency: u8,

    /// Retries after a timed-out request (0-10)
    #[arg(short = 'r', long, default_value_t = REQUEST_RETRIES_NUM as u8, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub max_retries: u8,

    /// Seconds to wait before each retry (0-60)
    #[arg(long, default_value_t = REQUEST_RETRY_WAIT_TIME.as_secs(), value_parser = clap::value_parser!(u64).range(0..=60))]
    pub retry_wait: u64,

    /// Write the JSON index to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the adjective index as an HTML table to this file
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Read defaults from this config file instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,
}
