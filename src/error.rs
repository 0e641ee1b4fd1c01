use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read input file {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid version {input:?}: {source}")]
    InvalidVersion {
        input: String,
        source: semver::Error,
    },

    #[error("Unsupported tag prefix in {tag:?}: only a single non-digit marker may precede the version")]
    UnsupportedTagPrefix { tag: String },

    #[error("Invalid repository {token:?}: expected owner/repository")]
    InvalidRepository { token: String },

    #[error("Malformed line {line_number}: {line:?}: expected owner/repository,minVersion")]
    MalformedLine { line_number: usize, line: String },

    #[error("Line {line_number}: {source}")]
    Line {
        line_number: usize,
        source: Box<ParseError>,
    },

    #[error("Release tag of {repository} could not be parsed: {source}")]
    InvalidTag {
        repository: String,
        source: Box<ParseError>,
    },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Repository not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ParseError {
    /// Input line the error was found on, if it came from the repository list
    pub fn line_number(&self) -> Option<usize> {
        match self {
            ParseError::MalformedLine { line_number, .. }
            | ParseError::Line { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }
}
