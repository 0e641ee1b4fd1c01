//! Version layer: fetching release tags and selecting the latest per minor line
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│   Semver    │────▶│  Selector   │
//! │ (tags)      │     │ (parse/cmp) │     │ (per minor) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ Registries  │
//! │  (GitHub)   │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: Release fetcher trait for listing the tags of a repository
//! - [`registries`]: Concrete fetcher implementations (GitHub Releases)
//! - [`semver`]: Precedence comparison, tag normalization and rendering
//! - [`selector`]: Latest release per (major, minor) line above a threshold

pub mod registries;
pub mod registry;
pub mod selector;
pub mod semver;
