//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting stats
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("GitHub API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("GitHub GraphQL error: {0}")]
    GraphQl(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("No GitHub token configured and no cached GitHub stats at {0}")]
    NoGithubSource(PathBuf),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}

/// Errors that can occur while reading or writing cache artifacts
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cache file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors from the git command line
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to execute git: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("git {command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Invalid {label}: {reason}")]
    InvalidArgument { label: String, reason: String },
}

/// Errors raised by the publish guard
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Failed to read rendered artifact {path}: {source}")]
    ReadArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Git(#[from] GitError),
}

/// Errors acquiring the run lock
#[derive(Error, Debug)]
pub enum LockError {
    #[error("Another run holds the lock at {0}")]
    Held(PathBuf),

    #[error("Lock file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
