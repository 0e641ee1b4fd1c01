//! Release fetcher test utilities

use std::collections::HashMap;
use std::io::Write;

use async_trait::async_trait;
use tempfile::NamedTempFile;

use release_lines::error::FetchError;
use release_lines::parser::types::Repository;
use release_lines::version::registry::ReleaseFetcher;

/// Fetcher serving fixed tag lists, `NotFound` for anything else
#[derive(Default)]
pub struct StaticFetcher {
    tags: HashMap<String, Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(mut self, repository: &str, tags: Vec<&str>) -> Self {
        self.tags.insert(
            repository.to_string(),
            tags.into_iter().map(|t| t.to_string()).collect(),
        );
        self
    }
}

#[async_trait]
impl ReleaseFetcher for StaticFetcher {
    async fn fetch_release_tags(&self, repository: &Repository) -> Result<Vec<String>, FetchError> {
        let key = repository.to_string();
        match self.tags.get(&key) {
            Some(tags) => Ok(tags.clone()),
            None => Err(FetchError::NotFound(key)),
        }
    }
}

/// Write an input file with the given data lines below a header
pub fn create_input_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "repository,min_version").unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}
