//! Version control access for the publish guard.
//!
//! The guard only needs four operations, expressed by [`VersionControl`].
//! [`GitCli`] implements them with the `git` command line, which inherits
//! the user's SSH agent and credential helpers for `push`.

use crate::utils::error::GitError;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Operations the publish guard performs against the repository
pub trait VersionControl {
    /// Contents of `path` in `HEAD`, or `None` if it is not committed there
    fn committed_contents(&self, path: &Path) -> Result<Option<Vec<u8>>, GitError>;

    /// Stage the given paths
    fn stage(&self, paths: &[PathBuf]) -> Result<(), GitError>;

    /// Create one commit containing exactly `paths`, which must be staged
    fn commit(&self, message: &str, paths: &[PathBuf]) -> Result<(), GitError>;

    /// Push the current branch to `remote`/`branch`
    fn push(&self, remote: &str, branch: &str) -> Result<(), GitError>;
}

/// Validate a git argument to prevent option or refspec injection
pub fn validate_git_arg(value: &str, label: &str) -> Result<(), GitError> {
    let invalid = |reason: &str| GitError::InvalidArgument {
        label: label.to_string(),
        reason: reason.to_string(),
    };

    if value.is_empty() {
        return Err(invalid("must not be empty"));
    }
    if value.starts_with('-') {
        return Err(invalid("must not start with '-'"));
    }
    if value.chars().any(|c| c.is_control()) {
        return Err(invalid("contains control characters"));
    }
    if value.contains("::") {
        return Err(invalid("'::' sequences are not allowed"));
    }
    Ok(())
}

/// `git` CLI bound to a work directory
#[derive(Debug, Clone)]
pub struct GitCli {
    work_dir: PathBuf,
}

impl GitCli {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path as git should see it from the work directory
    fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.work_dir).unwrap_or(path)
    }

    fn run(&self, args: &[&str]) -> Result<Output, GitError> {
        debug!("git {}", args.join(" "));
        Ok(Command::new("git")
            .current_dir(&self.work_dir)
            .args(args)
            .output()?)
    }

    fn relative_all(&self, paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| self.relative(p).display().to_string())
            .collect()
    }

    /// Run and require success
    fn run_checked(&self, args: &[&str]) -> Result<Output, GitError> {
        let output = self.run(args)?;
        if output.status.success() {
            return Ok(output);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!("git {} failed: {}", args[0], stderr);
        Err(GitError::CommandFailed {
            command: args[0].to_string(),
            stderr,
        })
    }
}

impl VersionControl for GitCli {
    fn committed_contents(&self, path: &Path) -> Result<Option<Vec<u8>>, GitError> {
        // `./` makes the path relative to the work directory, not the repo root
        let spec = format!("HEAD:./{}", self.relative(path).display());

        let lookup = self.run(&["rev-parse", "--verify", "--quiet", &spec])?;
        if !lookup.status.success() {
            debug!("{} is not committed yet", path.display());
            return Ok(None);
        }

        let blob = String::from_utf8_lossy(&lookup.stdout).trim().to_string();
        let output = self.run_checked(&["cat-file", "blob", &blob])?;
        Ok(Some(output.stdout))
    }

    fn stage(&self, paths: &[PathBuf]) -> Result<(), GitError> {
        let relative = self.relative_all(paths);

        let mut args = vec!["add", "--"];
        args.extend(relative.iter().map(String::as_str));
        self.run_checked(&args)?;

        info!("Staged {}", relative.join(", "));
        Ok(())
    }

    fn commit(&self, message: &str, paths: &[PathBuf]) -> Result<(), GitError> {
        let relative = self.relative_all(paths);

        // --only leaves anything else in the index out of the commit
        let mut args = vec!["commit", "--only", "-m", message, "--"];
        args.extend(relative.iter().map(String::as_str));
        self.run_checked(&args)?;

        info!("Committed: {}", message);
        Ok(())
    }

    fn push(&self, remote: &str, branch: &str) -> Result<(), GitError> {
        validate_git_arg(remote, "remote name")?;
        validate_git_arg(branch, "branch name")?;

        self.run_checked(&["push", remote, &format!("HEAD:{}", branch)])?;
        info!("Pushed to {}/{}", remote, branch);
        Ok(())
    }
}
