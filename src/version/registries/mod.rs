//! Release fetcher implementations

pub mod github;

pub use github::GitHubReleases;
