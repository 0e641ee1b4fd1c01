//! Loader for the repository list file
//!
//! ```text
//! repository,min_version
//! kubernetes/kubernetes,1.8.0
//! prometheus/prometheus,2.2.0
//! ```
//!
//! The first line is a header and is always skipped.

use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, ParseError};
use crate::parser::types::{Repository, RepositorySpec};
use crate::version::semver::parse_version;

/// Read the whole input file into memory
pub fn read_spec_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse the data lines of an input file.
///
/// Lines are parsed lazily so that callers can act on the earlier entries
/// before a malformed later line is reached. Blank lines are skipped.
pub fn load_specs(
    content: &str,
) -> impl Iterator<Item = Result<RepositorySpec, ParseError>> + '_ {
    content
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_spec_line(index + 1, line))
}

/// Parse a single `owner/repository,minVersion` line
pub fn parse_spec_line(line_number: usize, line: &str) -> Result<RepositorySpec, ParseError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [repository, min_version] = fields.as_slice() else {
        return Err(ParseError::MalformedLine {
            line_number,
            line: line.to_string(),
        });
    };

    let at_line = |source: ParseError| ParseError::Line {
        line_number,
        source: Box::new(source),
    };
    let spec = RepositorySpec {
        repository: repository.parse::<Repository>().map_err(at_line)?,
        min_version: parse_version(min_version).map_err(at_line)?,
        line_number,
    };
    debug!(
        "Loaded {} with minimum version {} from line {}",
        spec.repository, spec.min_version, line_number
    );

    Ok(spec)
}
