use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Fetch-related constants
// =============================================================================

/// Default base URL for the GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Number of releases requested from the first (and only) page
pub const DEFAULT_PER_PAGE: u8 = 10;

/// Largest page size GitHub accepts
pub const MAX_PER_PAGE: u8 = 100;

/// Timeout for a single release listing request in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default tracing directive when `RUST_LOG` is not set
pub const DEFAULT_LOG_DIRECTIVE: &str = "warn";

/// What to do when one repository cannot be processed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FailurePolicy {
    /// Stop at the first error
    #[default]
    FailFast,
    /// Report the error, keep going and summarize failures at the end
    Continue,
}

/// Log output format on stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Settings for the release fetcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub api_url: String,
    pub per_page: u8,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Resolved configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub failure_policy: FailurePolicy,
    pub log_format: LogFormat,
    pub fetch: FetchConfig,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            failure_policy: FailurePolicy::default(),
            log_format: LogFormat::default(),
            fetch: FetchConfig::default(),
        }
    }
}
