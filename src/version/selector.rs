//! Selection of the latest release per minor version line

use semver::Version;

use crate::version::semver::compare;

/// Select the highest version of every (major, minor) line above `min_version`.
///
/// The result is ordered newest first and holds at most one version per line.
/// Versions equal to `min_version` are excluded. Pre-releases take part like
/// any other version, so a line that only has pre-releases yields its highest
/// pre-release, while a final release always wins over its own pre-releases.
pub fn select_latest_per_minor(
    mut candidates: Vec<Version>,
    min_version: &Version,
) -> Vec<Version> {
    candidates.sort_unstable_by(|a, b| compare(b, a));

    let mut selected = Vec::new();
    let mut last_line: Option<(u64, u64)> = None;

    for candidate in candidates {
        let line = (candidate.major, candidate.minor);
        if compare(&candidate, min_version).is_gt() && last_line != Some(line) {
            last_line = Some(line);
            selected.push(candidate);
        }
    }

    selected
}
