//! Run lock preventing two refreshes from sharing a work directory.
//!
//! The lock is a file created with `create_new`, holding the owner's PID.
//! It is removed when the guard is dropped. A lock older than
//! [`STALE_LOCK_AGE`] is assumed to belong to a crashed run and replaced.

use crate::utils::config::STALE_LOCK_AGE;
use crate::utils::error::LockError;
use log::{debug, warn};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Held for the duration of a run
#[derive(Debug)]
pub struct RunLock {
    path: PathBuf,
}

impl RunLock {
    /// Acquire the lock at `path`
    pub fn acquire(path: impl Into<PathBuf>) -> Result<Self, LockError> {
        Self::acquire_with_max_age(path, STALE_LOCK_AGE)
    }

    pub fn acquire_with_max_age(
        path: impl Into<PathBuf>,
        max_age: Duration,
    ) -> Result<Self, LockError> {
        let path = path.into();

        match try_create(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                if !is_stale(&path, max_age) {
                    return Err(LockError::Held(path));
                }
                warn!("Replacing stale lock file {}", path.display());
                std::fs::remove_file(&path)?;
                try_create(&path).map_err(|e| match e.kind() {
                    ErrorKind::AlreadyExists => LockError::Held(path.clone()),
                    _ => LockError::Io(e),
                })?;
            }
            Err(e) => return Err(LockError::Io(e)),
        }

        debug!("Acquired lock {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            warn!("Failed to remove lock file {}: {}", self.path.display(), e);
        }
    }
}

fn try_create(path: &Path) -> std::io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    writeln!(file, "{}", std::process::id())
}

fn is_stale(path: &Path, max_age: Duration) -> bool {
    std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|modified| SystemTime::now().duration_since(modified).ok())
        .is_some_and(|age| age > max_age)
}
