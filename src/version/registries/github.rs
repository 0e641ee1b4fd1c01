//! GitHub Releases API fetcher

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{DEFAULT_PER_PAGE, DEFAULT_TIMEOUT_SECS, FetchConfig};
use crate::error::{ConfigError, FetchError};
use crate::parser::types::Repository;
use crate::version::registry::ReleaseFetcher;

/// Response item from GitHub Releases API
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
}

/// Fetcher for the first page of a repository's GitHub releases
pub struct GitHubReleases {
    client: reqwest::Client,
    base_url: String,
    per_page: u8,
}

impl GitHubReleases {
    /// Creates a fetcher against a custom base URL with default paging and timeout
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Self::from_config(&FetchConfig {
            api_url: base_url.to_string(),
            per_page: DEFAULT_PER_PAGE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn from_config(config: &FetchConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            per_page: config.per_page,
        })
    }

    fn retry_after(response: &reqwest::Response) -> Option<u64> {
        response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
    }

    fn is_rate_limited(response: &reqwest::Response) -> bool {
        match response.status() {
            reqwest::StatusCode::TOO_MANY_REQUESTS => true,
            reqwest::StatusCode::FORBIDDEN => {
                response
                    .headers()
                    .get("x-ratelimit-remaining")
                    .and_then(|v| v.to_str().ok())
                    == Some("0")
            }
            _ => false,
        }
    }
}

#[async_trait::async_trait]
impl ReleaseFetcher for GitHubReleases {
    async fn fetch_release_tags(&self, repository: &Repository) -> Result<Vec<String>, FetchError> {
        let url = format!(
            "{}/repos/{}/{}/releases?per_page={}",
            self.base_url, repository.owner, repository.name, self.per_page
        );
        debug!("Fetching releases: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(repository.to_string()));
        }

        if Self::is_rate_limited(&response) {
            return Err(FetchError::RateLimited {
                retry_after_secs: Self::retry_after(&response),
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(FetchError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let releases: Vec<Release> = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub releases response: {}", e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        Ok(releases.into_iter().map(|r| r.tag_name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn repository(owner: &str, name: &str) -> Repository {
        Repository::new(owner, name)
    }

    #[tokio::test]
    async fn fetch_release_tags_returns_tags_in_response_order() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/kubernetes/kubernetes/releases")
            .match_query(Matcher::UrlEncoded("per_page".into(), "10".into()))
            .match_header("accept", "application/vnd.github+json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([
                    {"tag_name": "v1.10.1", "published_at": "2018-04-12T00:00:00Z"},
                    {"tag_name": "v1.9.6", "published_at": "2018-03-21T00:00:00Z"},
                    {"tag_name": "v1.8.11", "published_at": "2018-04-05T00:00:00Z"}
                ])
                .to_string(),
            )
            .create_async()
            .await;

        let fetcher = GitHubReleases::new(&server.url()).unwrap();
        let tags = fetcher
            .fetch_release_tags(&repository("kubernetes", "kubernetes"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(tags, vec!["v1.10.1", "v1.9.6", "v1.8.11"]);
    }

    #[tokio::test]
    async fn fetch_release_tags_sends_configured_page_size() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/golang/go/releases")
            .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let fetcher = GitHubReleases::from_config(&FetchConfig {
            api_url: format!("{}/", server.url()),
            per_page: 100,
            timeout: Duration::from_secs(5),
        })
        .unwrap();
        let tags = fetcher
            .fetch_release_tags(&repository("golang", "go"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(tags.is_empty());
    }

    #[tokio::test]
    async fn fetch_release_tags_returns_not_found_for_nonexistent_repo() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/nonexistent/repo/releases")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let fetcher = GitHubReleases::new(&server.url()).unwrap();
        let result = fetcher
            .fetch_release_tags(&repository("nonexistent", "repo"))
            .await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::NotFound(ref name)) if name == "nonexistent/repo"));
    }

    #[tokio::test]
    async fn fetch_release_tags_returns_rate_limited_for_429() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/prometheus/prometheus/releases")
            .match_query(Matcher::Any)
            .with_status(429)
            .with_header("content-type", "application/json")
            .with_header("retry-after", "60")
            .with_body(r#"{"message": "API rate limit exceeded"}"#)
            .create_async()
            .await;

        let fetcher = GitHubReleases::new(&server.url()).unwrap();
        let result = fetcher
            .fetch_release_tags(&repository("prometheus", "prometheus"))
            .await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(FetchError::RateLimited {
                retry_after_secs: Some(60)
            })
        ));
    }

    #[tokio::test]
    async fn fetch_release_tags_returns_rate_limited_for_exhausted_quota() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/prometheus/prometheus/releases")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_header("x-ratelimit-remaining", "0")
            .with_body(r#"{"message": "API rate limit exceeded"}"#)
            .create_async()
            .await;

        let fetcher = GitHubReleases::new(&server.url()).unwrap();
        let result = fetcher
            .fetch_release_tags(&repository("prometheus", "prometheus"))
            .await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(FetchError::RateLimited {
                retry_after_secs: None
            })
        ));
    }

    #[tokio::test]
    async fn fetch_release_tags_returns_invalid_response_for_forbidden_with_quota_left() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/private/repo/releases")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_header("x-ratelimit-remaining", "42")
            .with_body(r#"{"message": "Resource not accessible"}"#)
            .create_async()
            .await;

        let fetcher = GitHubReleases::new(&server.url()).unwrap();
        let result = fetcher.fetch_release_tags(&repository("private", "repo")).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_release_tags_returns_network_error_when_unreachable() {
        let fetcher = GitHubReleases::new("http://127.0.0.1:1").unwrap();

        let result = fetcher.fetch_release_tags(&repository("some", "repo")).await;

        assert!(matches!(result, Err(FetchError::Network(_))));
    }

    #[tokio::test]
    async fn fetch_release_tags_returns_network_error_on_timeout() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            // accept and never answer
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let fetcher = GitHubReleases::from_config(&FetchConfig {
            api_url: format!("http://{}", addr),
            per_page: DEFAULT_PER_PAGE,
            timeout: Duration::from_millis(200),
        })
        .unwrap();
        let result = fetcher.fetch_release_tags(&repository("slow", "repo")).await;
        server.abort();

        assert!(matches!(result, Err(FetchError::Network(ref e)) if e.is_timeout()));
    }

    #[tokio::test]
    async fn fetch_release_tags_returns_invalid_response_for_server_error() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/some/repo/releases")
            .match_query(Matcher::Any)
            .with_status(502)
            .create_async()
            .await;

        let fetcher = GitHubReleases::new(&server.url()).unwrap();
        let result = fetcher.fetch_release_tags(&repository("some", "repo")).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_release_tags_returns_invalid_response_for_unexpected_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/some/repo/releases")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"releases": []}"#)
            .create_async()
            .await;

        let fetcher = GitHubReleases::new(&server.url()).unwrap();
        let result = fetcher.fetch_release_tags(&repository("some", "repo")).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_release_tags_returns_empty_for_repo_without_releases() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/some/repo/releases")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let fetcher = GitHubReleases::new(&server.url()).unwrap();
        let tags = fetcher
            .fetch_release_tags(&repository("some", "repo"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(tags.is_empty());
    }
}
