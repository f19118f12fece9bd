//! GitHub API access.
//!
//! Account totals come from GraphQL; repository listings and contributor
//! line counts come from the REST API.

pub mod client;
pub mod types;

// Re-export main types
pub use client::{lines_for_author, summarize, GithubClient};
