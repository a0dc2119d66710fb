use std::time::Duration;

use clap::{ArgMatches, CommandFactory, FromArgMatches, parser::ValueSource};

use bestiary_core::download::constants::{CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS};
use bestiary_core::{AdjectivePolicy, PipelineConfig, RetryPolicy};

use crate::app_config::FileConfig;
use crate::cli::Args;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CliValueSources {
    pub(crate) url: bool,
    pub(crate) download_images: bool,
    pub(crate) download_dir: bool,
    pub(crate) allow_unknown: bool,
    pub(crate) concurrency: bool,
    pub(crate) max_retries: bool,
    pub(crate) retry_wait: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HttpTimeoutSettings {
    pub(crate) connect_secs: u64,
    pub(crate) request_secs: u64,
}

impl Default for HttpTimeoutSettings {
    fn default() -> Self {
        Self {
            connect_secs: CONNECT_TIMEOUT_SECS,
            request_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl HttpTimeoutSettings {
    pub(crate) fn from_file_config(file_config: Option<&FileConfig>) -> Self {
        let mut settings = Self::default();
        if let Some(file_config) = file_config {
            if let Some(secs) = file_config.connect_timeout_secs {
                settings.connect_secs = secs;
            }
            if let Some(secs) = file_config.request_timeout_secs {
                settings.request_secs = secs;
            }
        }
        settings
    }

    pub(crate) fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }

    pub(crate) fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }
}

pub(crate) fn parse_cli_with_sources() -> (Args, CliValueSources) {
    let matches = Args::command().get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());
    (args, sources_from_matches(&matches))
}

fn sources_from_matches(matches: &ArgMatches) -> CliValueSources {
    CliValueSources {
        url: is_commandline_value(matches, "url"),
        download_images: is_commandline_value(matches, "download_images"),
        download_dir: is_commandline_value(matches, "download_dir"),
        allow_unknown: is_commandline_value(matches, "allow_unknown"),
        concurrency: is_commandline_value(matches, "concurrency"),
        max_retries: is_commandline_value(matches, "max_retries"),
        retry_wait: is_commandline_value(matches, "retry_wait"),
    }
}

fn is_commandline_value(matches: &ArgMatches, id: &str) -> bool {
    matches.value_source(id) == Some(ValueSource::CommandLine)
}

/// Fills every argument not given on the command line from `file_config`.
pub(crate) fn apply_config_defaults(
    mut args: Args,
    cli_sources: &CliValueSources,
    file_config: Option<&FileConfig>,
) -> Args {
    let Some(file_config) = file_config else {
        return args;
    };

    if !cli_sources.url
        && let Some(url) = &file_config.source_url
    {
        args.url.clone_from(url);
    }

    if !cli_sources.download_images
        && let Some(download_images) = file_config.download_images
    {
        args.download_images = download_images;
    }

    if !cli_sources.download_dir
        && let Some(download_dir) = &file_config.download_dir
    {
        args.download_dir.clone_from(download_dir);
    }

    if !cli_sources.allow_unknown
        && let Some(allow_unknown) = file_config.allow_unknown
    {
        args.allow_unknown = allow_unknown;
    }

    if !cli_sources.concurrency
        && let Some(concurrency) = file_config.concurrency
    {
        args.concurrency = concurrency;
    }

    if !cli_sources.max_retries
        && let Some(max_retries) = file_config.max_retries
    {
        args.max_retries = max_retries;
    }

    if !cli_sources.retry_wait
        && let Some(retry_wait_secs) = file_config.retry_wait_secs
    {
        args.retry_wait = retry_wait_secs;
    }

    args
}

pub(crate) fn retry_policy(args: &Args) -> RetryPolicy {
    RetryPolicy::new(
        u32::from(args.max_retries),
        Duration::from_secs(args.retry_wait),
    )
}

pub(crate) fn pipeline_config(args: &Args) -> PipelineConfig {
    let adjective_policy = if args.allow_unknown {
        AdjectivePolicy::AllowUnknown
    } else {
        AdjectivePolicy::Strict
    };

    let mut config = PipelineConfig::new(args.url.clone())
        .with_adjective_policy(adjective_policy)
        .with_download_workers(usize::from(args.concurrency));
    if args.download_images {
        config = config.with_images(args.download_dir.clone());
    } else {
        config.download_dir.clone_from(&args.download_dir);
    }
    config
}
