//! Stats collection.
//!
//! This module gathers a [`StatsSnapshot`] from:
//! - local session logs (token usage)
//! - the GitHub API (account totals, commits, lines of code)
//!
//! and falls back to the on-disk cache when a source has nothing to offer.

pub mod cache;
pub mod schema;
pub mod sessions;

pub use cache::{CachedStats, StatsCache};
pub use schema::{ClaudeStats, GithubStats, LineStats, StatsSnapshot};
pub use sessions::{estimate_cost, scan_sessions};

use crate::github::GithubClient;
use crate::utils::error::FetchError;
use log::{info, warn};
use std::path::PathBuf;

/// Anything that can produce a snapshot for one run
pub trait StatsSource {
    fn collect(&self) -> Result<StatsSnapshot, FetchError>;
}

/// Where GitHub numbers come from
pub enum GithubSource {
    /// Query the API; `login` defaults to the token owner
    Live {
        client: GithubClient,
        login: Option<String>,
    },
    /// Read `github_stats.json`; a missing file is an error only if `required`
    Cache { required: bool },
}

/// Production stats source: session logs + GitHub, with cache fallback
pub struct LiveStats {
    pub sessions_dir: PathBuf,
    pub cache: StatsCache,
    pub github: GithubSource,
    /// Write the cache after a successful collection
    pub save_cache: bool,
}

impl LiveStats {
    fn collect_claude(&self) -> Result<ClaudeStats, FetchError> {
        let stats = scan_sessions(&self.sessions_dir);
        if stats.sessions > 0 {
            return Ok(stats);
        }

        // No local logs (e.g. on a CI runner): reuse the last snapshot
        match self.cache.load_claude()? {
            Some(cached) => {
                info!("No local session logs, using cached session stats");
                Ok(cached)
            }
            None => {
                warn!(
                    "No session logs under {} and no cached session stats",
                    self.sessions_dir.display()
                );
                Ok(stats)
            }
        }
    }

    fn collect_github(&self) -> Result<GithubStats, FetchError> {
        match &self.github {
            GithubSource::Live { client, login } => client.fetch_stats(login.as_deref()),
            GithubSource::Cache { required } => match self.cache.load_github()? {
                Some(cached) => {
                    info!("Using cached GitHub stats from {}", self.cache.github_path().display());
                    Ok(cached)
                }
                None if *required => Err(FetchError::NoGithubSource(self.cache.github_path())),
                None => {
                    warn!("No cached GitHub stats, showing zeros");
                    Ok(GithubStats::default())
                }
            },
        }
    }
}

impl StatsSource for LiveStats {
    fn collect(&self) -> Result<StatsSnapshot, FetchError> {
        let snapshot = StatsSnapshot {
            claude: self.collect_claude()?,
            github: self.collect_github()?,
        };

        if self.save_cache {
            self.cache
                .save(&snapshot, chrono::Local::now().to_rfc3339())?;
        }

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live(dir: &std::path::Path, required: bool, save_cache: bool) -> LiveStats {
        LiveStats {
            sessions_dir: dir.join("sessions"),
            cache: StatsCache::new(dir.join("cache")),
            github: GithubSource::Cache { required },
            save_cache,
        }
    }

    #[test]
    fn test_required_github_cache_missing_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let source = live(temp_dir.path(), true, true);

        assert!(matches!(source.collect(), Err(FetchError::NoGithubSource(_))));
        // Nothing collected, nothing cached
        assert!(!temp_dir.path().join("cache").exists());
    }

    #[test]
    fn test_optional_github_cache_missing_gives_zeros() {
        let temp_dir = tempfile::tempdir().unwrap();
        let source = live(temp_dir.path(), false, false);

        let snapshot = source.collect().unwrap();
        assert_eq!(snapshot, StatsSnapshot::default());
    }

    #[test]
    fn test_falls_back_to_cached_claude_stats() {
        let temp_dir = tempfile::tempdir().unwrap();
        let cache = StatsCache::new(temp_dir.path().join("cache"));
        let cached = StatsSnapshot {
            claude: ClaudeStats {
                sessions: 9,
                total_tokens: 1_500,
                ..Default::default()
            },
            github: GithubStats {
                repos: 4,
                ..Default::default()
            },
        };
        cache.save(&cached, "earlier".to_string()).unwrap();

        let snapshot = live(temp_dir.path(), true, false).collect().unwrap();
        assert_eq!(snapshot, cached);
    }
}
