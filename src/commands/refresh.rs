//! Refresh command implementation.
//!
//! The refresh command:
//! 1. Collects stats (session logs, GitHub, cache fallback)
//! 2. Renders both themed cards in memory
//! 3. Writes both cards to disk
//! 4. Commits and pushes them if they differ from `HEAD`
//!
//! Any failure aborts the run. Nothing is written before every card has
//! rendered, and nothing is committed if a write fails.

use super::models::RefreshArgs;
use crate::github::GithubClient;
use crate::output::write_cards;
use crate::publish::{
    publish_if_changed, validate_git_arg, GitCli, PublishOutcome, PublishTarget, RunLock,
    VersionControl,
};
use crate::render::render_cards;
use crate::stats::{GithubSource, LiveStats, StatsCache, StatsSource};
use crate::utils::config::LOCK_FILE;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// What a refresh produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    /// Paths of the written cards
    pub artifacts: Vec<PathBuf>,

    /// Guard result; `None` when publishing was disabled
    pub publish: Option<PublishOutcome>,
}

/// Execute the refresh command against live sources and the `git` CLI
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Refresh options
/// * `today` - Date stamped on the cards and in the commit message
pub fn execute_refresh(args: RefreshArgs, today: NaiveDate) -> Result<RefreshOutcome> {
    validate_args(&args)?;

    let _lock = if args.lock {
        Some(
            RunLock::acquire(args.work_dir.join(LOCK_FILE))
                .context("Failed to acquire run lock")?,
        )
    } else {
        None
    };

    let source = live_stats(&args, true, true)?;
    let git = GitCli::new(&args.work_dir);
    let vcs = args.publish.then_some(&git);

    refresh_with(&source, vcs, &args, today)
}

/// Run the refresh pipeline with explicit collaborators
///
/// **Public** - lets callers (and tests) supply their own stats source and
/// version control
pub fn refresh_with<S, V>(
    source: &S,
    vcs: Option<&V>,
    args: &RefreshArgs,
    today: NaiveDate,
) -> Result<RefreshOutcome>
where
    S: StatsSource,
    V: VersionControl,
{
    let start_time = Instant::now();
    let steps = if vcs.is_some() { 4 } else { 3 };

    info!("Step 1/{}: Collecting stats...", steps);
    let snapshot = source.collect().context("Failed to collect stats")?;
    debug!("Snapshot: {:?}", snapshot);

    info!("Step 2/{}: Rendering cards...", steps);
    let cards = render_cards(&snapshot, today);

    info!("Step 3/{}: Writing cards...", steps);
    let artifacts = write_cards(&cards, &args.work_dir).context("Failed to write cards")?;

    let publish = match vcs {
        Some(vcs) => {
            info!("Step 4/{}: Checking for changes...", steps);
            let target = PublishTarget {
                remote: args.remote.clone(),
                branch: args.branch.clone(),
                cache_dir: Some(args.cache_path()),
            };
            let outcome = publish_if_changed(vcs, &artifacts, &target, today)
                .context("Failed to publish cards")?;
            Some(outcome)
        }
        None => None,
    };

    info!(
        "Refresh completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(RefreshOutcome { artifacts, publish })
}

/// Build the production stats source
///
/// **Public** - shared with the preview command
///
/// # Arguments
/// * `fetch` - query GitHub when a token is available; when false GitHub
///   stats come from the cache only and may be zero
/// * `save_cache` - write the cache after collecting
pub fn live_stats(args: &RefreshArgs, fetch: bool, save_cache: bool) -> Result<LiveStats> {
    let github = match (fetch, args.token()) {
        (true, Some(token)) => GithubSource::Live {
            client: GithubClient::new(&args.api_url, token)
                .context("Failed to create GitHub client")?,
            login: args.github_user.clone(),
        },
        (true, None) => {
            info!("No GitHub token configured, using cached GitHub stats");
            GithubSource::Cache { required: true }
        }
        (false, _) => GithubSource::Cache { required: false },
    };

    Ok(LiveStats {
        sessions_dir: args.sessions_path()?,
        cache: StatsCache::new(args.cache_path()),
        github,
        save_cache,
    })
}

/// Validate refresh arguments
///
/// **Public** - can be called before execute_refresh for early validation
pub fn validate_args(args: &RefreshArgs) -> Result<()> {
    if !args.work_dir.is_dir() {
        anyhow::bail!("Work directory does not exist: {}", args.work_dir.display());
    }

    if !args.api_url.starts_with("http://") && !args.api_url.starts_with("https://") {
        anyhow::bail!("API URL must start with http:// or https://");
    }

    if let Some(user) = &args.github_user {
        if user.trim().is_empty() {
            anyhow::bail!("GitHub user cannot be empty");
        }
    }

    if args.publish {
        validate_git_arg(&args.remote, "remote name")?;
        validate_git_arg(&args.branch, "branch name")?;
    }

    Ok(())
}
