//! nfo-stats CLI
//!
//! Regenerates the NFO-style profile stat cards (`dark_mode.svg` and
//! `light_mode.svg`) and publishes them when they change. Running with no
//! subcommand performs a full refresh, which is what the scheduler calls.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::{Env, Target};
use log::info;
use std::path::PathBuf;

use nfo_stats::commands::{
    execute_open, execute_preview, execute_refresh, OpenTarget, RefreshArgs, RefreshOutcome,
};
use nfo_stats::publish::PublishOutcome;
use nfo_stats::utils::config::{
    DEFAULT_API_URL, DEFAULT_BRANCH, DEFAULT_CACHE_DIR, DEFAULT_REMOTE,
};

/// nfo-stats - profile stat cards for a GitHub README
#[derive(Parser, Debug)]
#[command(name = "nfo-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute (defaults to `refresh`)
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    options: GlobalOptions,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Options accepted by every subcommand
#[derive(Args, Debug)]
struct GlobalOptions {
    /// Repository work directory
    #[arg(long, global = true, env = "NFO_WORK_DIR", default_value = ".")]
    work_dir: PathBuf,

    /// Cache directory (relative to the work directory)
    #[arg(long, global = true, env = "NFO_CACHE_DIR", default_value = DEFAULT_CACHE_DIR)]
    cache_dir: PathBuf,

    /// Session log directory [default: ~/.claude/projects]
    #[arg(long, global = true, env = "NFO_SESSIONS_DIR")]
    sessions_dir: Option<PathBuf>,

    /// GitHub login [default: owner of the token]
    #[arg(long, global = true, env = "NFO_GITHUB_USER")]
    github_user: Option<String>,

    /// GitHub API token
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// GitHub API root
    #[arg(long, global = true, env = "NFO_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Remote to push to
    #[arg(long, global = true, default_value = DEFAULT_REMOTE)]
    remote: String,

    /// Branch to push to
    #[arg(long, global = true, default_value = DEFAULT_BRANCH)]
    branch: String,

    /// Skip the run lock
    #[arg(long, global = true)]
    no_lock: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render both cards and commit/push them if they changed
    Refresh,

    /// Render both cards without touching version control
    Render,

    /// Print the card to the terminal
    Preview {
        /// Fetch fresh GitHub stats instead of reading the cache
        #[arg(long)]
        fetch: bool,

        /// Fetch fresh stats and save them to the cache
        #[arg(long)]
        save: bool,

        /// Disable ANSI colours
        #[arg(long)]
        no_color: bool,
    },

    /// Open rendered cards in the system viewer
    Open {
        /// Which card to open
        #[arg(value_enum, default_value = "dark")]
        target: OpenTarget,
    },
}

impl GlobalOptions {
    fn into_refresh_args(self, publish: bool) -> RefreshArgs {
        RefreshArgs {
            work_dir: self.work_dir,
            cache_dir: self.cache_dir,
            sessions_dir: self.sessions_dir,
            github_user: self.github_user,
            github_token: self.github_token,
            api_url: self.api_url,
            remote: self.remote,
            branch: self.branch,
            publish,
            lock: !self.no_lock,
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging: timestamped lines on stdout for the scheduler's log
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .target(Target::Stdout)
        .init();

    let today = chrono::Local::now().date_naive();

    // Execute command
    match cli.command.unwrap_or(Commands::Refresh) {
        Commands::Refresh => {
            let outcome = execute_refresh(cli.options.into_refresh_args(true), today)?;
            report(&outcome);
        }

        Commands::Render => {
            let outcome = execute_refresh(cli.options.into_refresh_args(false), today)?;
            report(&outcome);
        }

        Commands::Preview {
            fetch,
            save,
            no_color,
        } => {
            let args = cli.options.into_refresh_args(false);
            let now = chrono::Local::now().naive_local();
            let preview = execute_preview(&args, fetch, save, !no_color, now)?;
            println!("{}", preview);
        }

        Commands::Open { target } => {
            execute_open(&cli.options.work_dir, target)?;
        }
    }

    Ok(())
}

/// Final status line
///
/// **Private** - internal command output
fn report(outcome: &RefreshOutcome) {
    match &outcome.publish {
        Some(PublishOutcome::Unchanged) => info!("Cards are up to date, nothing published"),
        Some(PublishOutcome::Published { message }) => info!("Published: {}", message),
        None => info!("Rendered {} cards", outcome.artifacts.len()),
    }
}
