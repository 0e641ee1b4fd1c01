//! Release fetcher trait for listing the release tags of a repository

#[cfg(test)]
use mockall::automock;

use crate::error::FetchError;
use crate::parser::types::Repository;

/// Trait for fetching release tags from a release-hosting service
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseFetcher: Send + Sync {
    /// Fetches the raw release tags of a repository
    ///
    /// # Arguments
    /// * `repository` - The repository to list releases for (e.g., "kubernetes/kubernetes")
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names in the order the service returned them, unparsed
    /// * `Err(FetchError)` - If the request fails
    async fn fetch_release_tags(&self, repository: &Repository) -> Result<Vec<String>, FetchError>;
}
