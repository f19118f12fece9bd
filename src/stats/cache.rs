//! On-disk stats cache.
//!
//! Two files live under the cache directory:
//! - `stats.json`: full snapshot plus the time it was taken
//! - `github_stats.json`: GitHub numbers alone
//!
//! The cache is a fallback for runs where a source is unavailable (e.g. a CI
//! runner has no local session logs). A live run never depends on it.

use super::schema::{ClaudeStats, GithubStats, StatsSnapshot};
use crate::utils::config::{GITHUB_CACHE_FILE, STATS_CACHE_FILE};
use crate::utils::error::CacheError;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Contents of `stats.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedStats {
    pub timestamp: String,
    pub claude: ClaudeStats,
    pub github: GithubStats,
}

/// Handle on the cache directory
#[derive(Debug, Clone)]
pub struct StatsCache {
    dir: PathBuf,
}

impl StatsCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn stats_path(&self) -> PathBuf {
        self.dir.join(STATS_CACHE_FILE)
    }

    pub fn github_path(&self) -> PathBuf {
        self.dir.join(GITHUB_CACHE_FILE)
    }

    /// Session stats from the last saved snapshot, if any
    pub fn load_claude(&self) -> Result<Option<ClaudeStats>, CacheError> {
        Ok(read_json::<CachedStats>(&self.stats_path())?.map(|cached| cached.claude))
    }

    /// GitHub stats from the last saved snapshot, if any
    pub fn load_github(&self) -> Result<Option<GithubStats>, CacheError> {
        read_json(&self.github_path())
    }

    /// Persist a snapshot, stamping it with `timestamp`
    pub fn save(&self, snapshot: &StatsSnapshot, timestamp: String) -> Result<(), CacheError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| CacheError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let cached = CachedStats {
            timestamp,
            claude: snapshot.claude.clone(),
            github: snapshot.github.clone(),
        };

        write_json(&self.stats_path(), &cached)?;
        write_json(&self.github_path(), &snapshot.github)?;

        info!("Stats cached to {}", self.dir.display());
        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, CacheError> {
    if !path.exists() {
        debug!("No cache file at {}", path.display());
        return Ok(None);
    }

    let file = File::open(path).map_err(|source| CacheError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(file)
        .map(Some)
        .map_err(|source| CacheError::Json {
            path: path.to_path_buf(),
            source,
        })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), CacheError> {
    let io_err = |source: std::io::Error| CacheError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| CacheError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    writer.flush().map_err(io_err)
}
