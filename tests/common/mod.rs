//! Fakes shared by the integration tests.

#![allow(dead_code)]

use nfo_stats::publish::VersionControl;
use nfo_stats::stats::{ClaudeStats, GithubStats, StatsSnapshot, StatsSource};
use nfo_stats::utils::error::{FetchError, GitError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One recorded version-control call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Stage(Vec<PathBuf>),
    Commit(String, Vec<PathBuf>),
    Push(String, String),
}

/// In-memory repository: `commit` snapshots exactly the paths it is given
#[derive(Default)]
pub struct RecordingVcs {
    head: RefCell<HashMap<PathBuf, Vec<u8>>>,
    calls: RefCell<Vec<Call>>,
    fail_push: bool,
}

impl RecordingVcs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_push() -> Self {
        Self {
            fail_push: true,
            ..Self::default()
        }
    }

    /// Pretend `path` is committed with `contents`
    pub fn seed(&self, path: &Path, contents: &[u8]) {
        self.head
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_vec());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn commits(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Commit(message, _) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl VersionControl for RecordingVcs {
    fn committed_contents(&self, path: &Path) -> Result<Option<Vec<u8>>, GitError> {
        Ok(self.head.borrow().get(path).cloned())
    }

    fn stage(&self, paths: &[PathBuf]) -> Result<(), GitError> {
        self.calls.borrow_mut().push(Call::Stage(paths.to_vec()));
        Ok(())
    }

    fn commit(&self, message: &str, paths: &[PathBuf]) -> Result<(), GitError> {
        for path in paths.iter().filter(|path| path.is_file()) {
            let contents = std::fs::read(path)?;
            self.head.borrow_mut().insert(path.clone(), contents);
        }
        self.calls
            .borrow_mut()
            .push(Call::Commit(message.to_string(), paths.to_vec()));
        Ok(())
    }

    fn push(&self, remote: &str, branch: &str) -> Result<(), GitError> {
        self.calls
            .borrow_mut()
            .push(Call::Push(remote.to_string(), branch.to_string()));
        if self.fail_push {
            return Err(GitError::CommandFailed {
                command: "push".to_string(),
                stderr: "remote rejected".to_string(),
            });
        }
        Ok(())
    }
}

/// Returns the same snapshot every time
pub struct FixedStats(pub StatsSnapshot);

impl StatsSource for FixedStats {
    fn collect(&self) -> Result<StatsSnapshot, FetchError> {
        Ok(self.0.clone())
    }
}

/// Always fails, like GitHub being unreachable
pub struct FailingStats;

impl StatsSource for FailingStats {
    fn collect(&self) -> Result<StatsSnapshot, FetchError> {
        Err(FetchError::GraphQl("rate limited".to_string()))
    }
}

pub fn sample_snapshot() -> StatsSnapshot {
    StatsSnapshot {
        claude: ClaudeStats {
            input_tokens: 1_200_000,
            output_tokens: 340_000,
            cache_creation: 50_000,
            cache_read: 9_000_000,
            total_tokens: 10_590_000,
            sessions: 42,
            messages: 1_337,
            cost_estimate: 34.7,
        },
        github: GithubStats {
            repos: 12,
            commits: 987,
            stars: 30,
            followers: 8,
            following: 3,
            contributed_repos: 5,
            prs: 21,
            issues: 4,
            loc_added: 150_000,
            loc_deleted: 40_000,
            loc_total: 110_000,
        },
    }
}
