//! Command line arguments

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{
    Config, DEFAULT_API_URL, DEFAULT_PER_PAGE, DEFAULT_TIMEOUT_SECS, FailurePolicy, FetchConfig,
    LogFormat, MAX_PER_PAGE,
};

#[derive(Debug, Parser)]
#[command(name = "release-lines")]
#[command(
    version,
    about = "Print the latest release of each minor version line above a minimum version"
)]
pub struct Cli {
    /// File with a header line followed by `owner/repository,minVersion` lines
    pub input: PathBuf,

    /// Stop at the first failing repository, or continue and summarize at the end
    #[arg(
        long,
        value_enum,
        env = "RELEASE_LINES_FAILURE_POLICY",
        default_value_t = FailurePolicy::FailFast
    )]
    pub failure_policy: FailurePolicy,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "RELEASE_LINES_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Number of releases fetched per repository
    #[arg(
        long,
        env = "RELEASE_LINES_PER_PAGE",
        default_value_t = DEFAULT_PER_PAGE,
        value_parser = clap::value_parser!(u8).range(1..=MAX_PER_PAGE as i64)
    )]
    pub per_page: u8,

    /// Timeout of each release request in seconds
    #[arg(
        long,
        env = "RELEASE_LINES_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Format of the diagnostics written to stderr
    #[arg(
        long,
        value_enum,
        env = "RELEASE_LINES_LOG_FORMAT",
        default_value_t = LogFormat::Text
    )]
    pub log_format: LogFormat,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            failure_policy: cli.failure_policy,
            log_format: cli.log_format,
            fetch: FetchConfig {
                api_url: cli.api_url,
                per_page: cli.per_page,
                timeout: Duration::from_secs(cli.timeout_secs),
            },
        }
    }
}
