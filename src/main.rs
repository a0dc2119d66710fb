//! CLI entry point for the bestiary tool.

use std::fs;

use anyhow::{Context, Result};
use bestiary_core::index::render_html;
use bestiary_core::{Fetcher, HttpClient, IndexBuilder};
use tracing::{debug, info};

mod app_config;
mod cli;
mod config_runtime;

use config_runtime::{
    HttpTimeoutSettings, apply_config_defaults, parse_cli_with_sources, pipeline_config,
    retry_policy,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let (args, cli_sources) = parse_cli_with_sources();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // Logs go to stderr so the JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let loaded = match &args.config {
        Some(path) => app_config::load_explicit_file_config(path)?,
        None => app_config::load_default_file_config()?,
    };
    if loaded.loaded_from_file {
        debug!(path = ?loaded.path, "loaded config file");
    }

    let args = apply_config_defaults(args, &cli_sources, loaded.config.as_ref());
    debug!(?args, "CLI arguments resolved");
    info!(download_images = args.download_images, "Bestiary starting");

    let timeouts = HttpTimeoutSettings::from_file_config(loaded.config.as_ref());
    let client = HttpClient::with_timeout_durations(timeouts.connect(), timeouts.request())
        .context("Failed to build HTTP client")?;
    let fetcher = Fetcher::http(client, retry_policy(&args));

    let index = IndexBuilder::new(pipeline_config(&args), fetcher)
        .build()
        .await?;

    info!(
        adjectives = index.adjectives.len(),
        synonyms = index.synonyms.len(),
        animals = index.records.len(),
        "Index built"
    );
    if let Some(stats) = &index.download_stats {
        info!(
            completed = stats.completed(),
            failed = stats.failed(),
            skipped = stats.skipped(),
            "Image downloads complete"
        );
    }

    let json = serde_json::to_string_pretty(&index)?;
    match &args.output {
        Some(path) => fs::write(path, format!("{json}\n"))
            .with_context(|| format!("Failed to write index to '{}'", path.display()))?,
        None => println!("{json}"),
    }

    if let Some(path) = &args.html {
        fs::write(path, render_html(&index.adjectives))
            .with_context(|| format!("Failed to write HTML index to '{}'", path.display()))?;
    }

    Ok(())
}
