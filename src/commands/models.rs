use crate::utils::config::{
    DEFAULT_API_URL, DEFAULT_BRANCH, DEFAULT_CACHE_DIR, DEFAULT_REMOTE, SESSIONS_SUBDIR,
};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Options shared by every command that collects stats
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RefreshArgs {
    /// Repository work directory; cards are written here
    pub work_dir: PathBuf,

    /// Cache directory, relative to `work_dir` unless absolute
    pub cache_dir: PathBuf,

    /// Session log directory (None = `~/.claude/projects`)
    pub sessions_dir: Option<PathBuf>,

    /// GitHub login (None = owner of the token)
    pub github_user: Option<String>,

    /// GitHub token; without one GitHub stats come from the cache
    pub github_token: Option<String>,

    /// GitHub API root
    pub api_url: String,

    /// Remote and branch to push to
    pub remote: String,
    pub branch: String,

    /// Commit and push changed cards
    pub publish: bool,

    /// Hold the run lock while working
    pub lock: bool,
}

impl Default for RefreshArgs {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            sessions_dir: None,
            github_user: None,
            github_token: None,
            api_url: DEFAULT_API_URL.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            publish: true,
            lock: true,
        }
    }
}

impl RefreshArgs {
    /// Cache directory resolved against the work directory
    pub fn cache_path(&self) -> PathBuf {
        self.work_dir.join(&self.cache_dir)
    }

    /// Session log directory, defaulting to the one under the home directory
    pub fn sessions_path(&self) -> Result<PathBuf> {
        match &self.sessions_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::home_dir()
                .map(|home| home.join(SESSIONS_SUBDIR))
                .context("Cannot determine home directory for session logs"),
        }
    }

    /// Token, ignoring blank values (unset CI secrets expand to "")
    pub fn token(&self) -> Option<&str> {
        self.github_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
