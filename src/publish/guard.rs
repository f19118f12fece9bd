//! Publish guard: commit and push the rendered cards only when they changed.
//!
//! The two cards are one change unit. If either differs from `HEAD` (or is
//! not committed yet) both are staged together with the cache directory,
//! committed once and pushed once. The commit holds only those paths, even
//! if other changes are staged. Otherwise nothing touches the repository.

use super::git::VersionControl;
use crate::utils::error::PublishError;
use chrono::NaiveDate;
use log::info;
use std::path::{Path, PathBuf};

/// Where and how to publish
#[derive(Debug, Clone)]
pub struct PublishTarget {
    pub remote: String,
    pub branch: String,
    /// Staged and committed alongside the cards when it holds any files
    pub cache_dir: Option<PathBuf>,
}

/// Terminal state of one guard run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Unchanged,
    Published { message: String },
}

/// Commit message for a given day
pub fn commit_message(date: NaiveDate) -> String {
    format!("Update profile stats ({})", date.format("%Y-%m-%d"))
}

/// Whether any artifact differs from its committed version
///
/// Byte equality only; an artifact missing from `HEAD` counts as changed.
pub fn artifacts_changed(
    vcs: &impl VersionControl,
    artifacts: &[PathBuf],
) -> Result<bool, PublishError> {
    for path in artifacts {
        let current = std::fs::read(path).map_err(|source| PublishError::ReadArtifact {
            path: path.clone(),
            source,
        })?;

        match vcs.committed_contents(path)? {
            Some(committed) if committed == current => continue,
            Some(_) => {
                info!("{} changed since last commit", path.display());
                return Ok(true);
            }
            None => {
                info!("{} has never been committed", path.display());
                return Ok(true);
            }
        }
    }

    Ok(false)
}

/// Compare, then stage/commit/push if anything changed
///
/// **Public** - the second half of every refresh
///
/// # Errors
/// Any failing git operation aborts the run; there is no rollback because a
/// single `git commit` is already atomic.
pub fn publish_if_changed(
    vcs: &impl VersionControl,
    artifacts: &[PathBuf],
    target: &PublishTarget,
    date: NaiveDate,
) -> Result<PublishOutcome, PublishError> {
    if !artifacts_changed(vcs, artifacts)? {
        info!("No changes to commit");
        return Ok(PublishOutcome::Unchanged);
    }

    let mut paths = artifacts.to_vec();
    if let Some(cache_dir) = target.cache_dir.as_deref().filter(|dir| has_entries(dir)) {
        paths.push(cache_dir.to_path_buf());
    }

    let message = commit_message(date);

    vcs.stage(&paths)?;
    vcs.commit(&message, &paths)?;
    vcs.push(&target.remote, &target.branch)?;

    info!("Stats updated and pushed to {}/{}", target.remote, target.branch);
    Ok(PublishOutcome::Published { message })
}

/// Whether `dir` holds anything git could commit
fn has_entries(dir: &Path) -> bool {
    std::fs::read_dir(dir)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_message_embeds_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(commit_message(date), "Update profile stats (2026-10-19)");
    }

    #[test]
    fn test_has_entries() {
        let temp_dir = tempfile::tempdir().unwrap();
        let cache = temp_dir.path().join("cache");
        assert!(!has_entries(&cache));

        std::fs::create_dir(&cache).unwrap();
        assert!(!has_entries(&cache));

        std::fs::write(cache.join("stats.json"), "{}").unwrap();
        assert!(has_entries(&cache));
    }
}
