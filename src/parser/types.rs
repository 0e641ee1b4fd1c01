//! Common types for the repository list file

use std::fmt;

use semver::Version;

use crate::error::ParseError;

/// A repository on the release-hosting service
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl std::str::FromStr for Repository {
    type Err = ParseError;

    /// Parses `owner/repository`; exactly one `/` between two valid segments.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidRepository {
            token: s.to_string(),
        };

        let (owner, name) = s.split_once('/').ok_or_else(invalid)?;
        if !is_valid_segment(owner) || !is_valid_segment(name) {
            return Err(invalid());
        }

        Ok(Self::new(owner, name))
    }
}

/// Owner and repository names are limited to `[A-Za-z0-9._-]`, excluding
/// `.` and `..`, so they can be placed in a URL path as is.
fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

/// One data line of the input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySpec {
    pub repository: Repository,
    pub min_version: Version,
    /// 1-based line number in the input file
    pub line_number: usize,
}
