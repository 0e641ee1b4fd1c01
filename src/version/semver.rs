//! Semantic version precedence, tag normalization and rendering

use std::cmp::Ordering;

use semver::Version;

use crate::error::ParseError;

/// Compare two versions by semver precedence.
///
/// Build metadata is ignored, which is why this is used instead of
/// `Version`'s own `Ord` implementation.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| a.pre.cmp(&b.pre))
}

/// Parse a release tag such as `v1.2.3` or `1.2.3-rc.1`.
///
/// A single leading non-digit marker is stripped. Anything longer than one
/// character before the first digit is rejected.
pub fn parse_tag(tag: &str) -> Result<Version, ParseError> {
    let trimmed = tag.trim();
    let mut chars = trimmed.chars();
    let stripped = match chars.next() {
        Some(c) if !c.is_ascii_digit() => chars.as_str(),
        _ => trimmed,
    };

    if !stripped.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ParseError::UnsupportedTagPrefix {
            tag: tag.to_string(),
        });
    }

    Version::parse(stripped).map_err(|source| ParseError::InvalidVersion {
        input: tag.to_string(),
        source,
    })
}

/// Parse a user supplied version, e.g. the threshold column of the input file.
///
/// Accepts the same forms as [`parse_tag`], so `1.8.0` and `v1.8.0` are equal.
pub fn parse_version(input: &str) -> Result<Version, ParseError> {
    parse_tag(input)
}

/// Render `major.minor.patch[-prerelease]`, dropping build metadata.
pub fn canonical(version: &Version) -> String {
    if version.pre.is_empty() {
        format!("{}.{}.{}", version.major, version.minor, version.patch)
    } else {
        format!(
            "{}.{}.{}-{}",
            version.major, version.minor, version.patch, version.pre
        )
    }
}
