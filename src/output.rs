//! Rendering of per-repository results

use std::io::Write;

use semver::Version;

use crate::parser::types::Repository;
use crate::version::semver::canonical;

/// Format `latest versions of owner/repository: [v1 v2 ...]`
pub fn format_line(repository: &Repository, versions: &[Version]) -> String {
    let rendered: Vec<String> = versions.iter().map(canonical).collect();
    format!("latest versions of {}: [{}]", repository, rendered.join(" "))
}

/// Write one result line and flush it, so it survives a later failure
pub fn write_line<W: Write>(
    writer: &mut W,
    repository: &Repository,
    versions: &[Version],
) -> std::io::Result<()> {
    writeln!(writer, "{}", format_line(repository, versions))?;
    writer.flush()
}
