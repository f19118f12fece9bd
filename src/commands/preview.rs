//! Preview and open commands.
//!
//! `preview` prints a detailed version of the card to the terminal without
//! touching the rendered files; `open` hands the rendered SVGs to the system
//! viewer.

use super::models::RefreshArgs;
use super::refresh::live_stats;
use crate::render::{render_preview, Theme};
use crate::stats::StatsSource;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use log::info;
use std::path::{Path, PathBuf};

/// Which rendered card(s) to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OpenTarget {
    Dark,
    Light,
    Both,
}

impl OpenTarget {
    pub fn themes(self) -> &'static [Theme] {
        match self {
            OpenTarget::Dark => &[Theme::Dark],
            OpenTarget::Light => &[Theme::Light],
            OpenTarget::Both => &Theme::ALL,
        }
    }
}

/// Collect stats and render the terminal preview
///
/// # Arguments
/// * `fetch` - query GitHub instead of reading its numbers from the cache
/// * `save` - fetch, then write the cache; cached or placeholder GitHub
///   numbers are never written back
/// * `color` - emit ANSI colours
/// * `now` - timestamp shown on the preview
pub fn execute_preview(
    args: &RefreshArgs,
    fetch: bool,
    save: bool,
    color: bool,
    now: NaiveDateTime,
) -> Result<String> {
    let source = live_stats(args, fetch || save, save)?;
    let snapshot = source.collect().context("Failed to collect stats")?;

    Ok(render_preview(&snapshot, args.github_user.as_deref(), now, color))
}

/// Paths of the cards to open, failing if any is missing
pub fn cards_to_open(work_dir: &Path, target: OpenTarget) -> Result<Vec<PathBuf>> {
    target
        .themes()
        .iter()
        .map(|theme| -> Result<PathBuf> {
            let path = work_dir.join(theme.file_name());
            if path.is_file() {
                Ok(path)
            } else {
                anyhow::bail!("{} not found (run `nfo-stats render` first)", path.display())
            }
        })
        .collect()
}

/// Open rendered cards with the system viewer
pub fn execute_open(work_dir: &Path, target: OpenTarget) -> Result<()> {
    for path in cards_to_open(work_dir, target)? {
        info!("Opening {}", path.display());
        open::that(&path).with_context(|| format!("Failed to open {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatsCache;

    fn offline_args(dir: &Path) -> RefreshArgs {
        RefreshArgs {
            work_dir: dir.to_path_buf(),
            sessions_dir: Some(dir.join("sessions")),
            github_token: None,
            publish: false,
            lock: false,
            ..Default::default()
        }
    }

    fn now() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_preview_without_cache_shows_zeros_and_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = offline_args(temp_dir.path());

        let preview = execute_preview(&args, false, false, false, now()).unwrap();

        assert!(preview.contains("Last Updated: 2026-10-19 09:30:00"));
        assert!(!StatsCache::new(args.cache_path()).github_path().exists());
    }

    #[test]
    fn test_save_never_persists_placeholder_github_stats() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = offline_args(temp_dir.path());

        assert!(execute_preview(&args, false, true, false, now()).is_err());

        let cache = StatsCache::new(args.cache_path());
        assert!(!cache.github_path().exists());
        assert!(!cache.stats_path().exists());
    }

    #[test]
    fn test_cards_to_open_requires_rendered_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(cards_to_open(temp_dir.path(), OpenTarget::Dark).is_err());

        std::fs::write(temp_dir.path().join(Theme::Dark.file_name()), "<svg/>").unwrap();
        let paths = cards_to_open(temp_dir.path(), OpenTarget::Dark).unwrap();
        assert_eq!(paths, vec![temp_dir.path().join("dark_mode.svg")]);

        assert!(cards_to_open(temp_dir.path(), OpenTarget::Both).is_err());
    }
}
