//! Conditional publishing of rendered cards.
//!
//! - `git`: the version control seam and its `git` CLI implementation
//! - `guard`: compare against `HEAD`, then commit and push on change
//! - `lock`: keeps overlapping runs out of the same work directory

pub mod git;
pub mod guard;
pub mod lock;

pub use git::{validate_git_arg, GitCli, VersionControl};
pub use guard::{
    artifacts_changed, commit_message, publish_if_changed, PublishOutcome, PublishTarget,
};
pub use lock::RunLock;
