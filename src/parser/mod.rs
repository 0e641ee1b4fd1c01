//! Input file parsing
//!
//! Turns the repository list file into [`types::RepositorySpec`] values.

pub mod spec_file;
pub mod types;
