//! Drives loading, fetching, selection and output for every repository

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use semver::Version;
use tracing::{error, info};

use crate::config::FailurePolicy;
use crate::error::{Error, ParseError};
use crate::output::write_line;
use crate::parser::spec_file::load_specs;
use crate::parser::types::RepositorySpec;
use crate::version::registry::ReleaseFetcher;
use crate::version::selector::select_latest_per_minor;
use crate::version::semver::parse_tag;

/// A repository or input line that could not be processed
#[derive(Debug)]
pub struct Failure {
    /// `owner/repository`, or `line N` when the line itself could not be parsed
    pub label: String,
    pub error: Error,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            // the message already names the line
            Error::Parse(e) if e.line_number().is_some() => write!(f, "{}", e),
            e => write!(f, "{}: {}", self.label, e),
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failures: Vec<Failure>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct Runner {
    fetcher: Arc<dyn ReleaseFetcher>,
    policy: FailurePolicy,
}

impl Runner {
    pub fn new(fetcher: Arc<dyn ReleaseFetcher>, policy: FailurePolicy) -> Self {
        Self { fetcher, policy }
    }

    /// Process every repository of `content` in input order, writing one line each.
    ///
    /// Under [`FailurePolicy::FailFast`] the first error is returned as is.
    /// Under [`FailurePolicy::Continue`] errors are collected in the summary.
    /// Lines already written are never touched by a later failure.
    pub async fn run<W: Write>(&self, content: &str, writer: &mut W) -> Result<RunSummary, Error> {
        let mut summary = RunSummary::default();

        for entry in load_specs(content) {
            let (label, result) = match entry {
                Ok(spec) => {
                    let result = self.process(&spec, &mut *writer).await;
                    (spec.repository.to_string(), result)
                }
                Err(e) => (line_label(&e), Err(e.into())),
            };

            match result {
                Ok(()) => summary.succeeded += 1,
                Err(e) if self.policy == FailurePolicy::FailFast => return Err(e),
                Err(e) => {
                    error!("Skipping {}: {}", label, e);
                    summary.failures.push(Failure { label, error: e });
                }
            }
        }

        Ok(summary)
    }

    async fn process<W: Write>(&self, spec: &RepositorySpec, writer: &mut W) -> Result<(), Error> {
        let tags = self.fetcher.fetch_release_tags(&spec.repository).await?;
        let candidates = parse_tags(&spec.repository.to_string(), &tags)?;
        let selected = select_latest_per_minor(candidates, &spec.min_version);

        info!(
            "{}: {} releases fetched, {} minor lines above {}",
            spec.repository,
            tags.len(),
            selected.len(),
            spec.min_version
        );

        write_line(writer, &spec.repository, &selected)?;
        Ok(())
    }
}

/// Parse all tags of a repository; a single malformed tag fails the repository.
fn parse_tags(repository: &str, tags: &[String]) -> Result<Vec<Version>, ParseError> {
    tags.iter()
        .map(|tag| {
            parse_tag(tag).map_err(|source| ParseError::InvalidTag {
                repository: repository.to_string(),
                source: Box::new(source),
            })
        })
        .collect()
}

fn line_label(error: &ParseError) -> String {
    match error.line_number() {
        Some(line_number) => format!("line {}", line_number),
        None => "input".to_string(),
    }
}
