//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for GitHub API requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Default GitHub API root (GraphQL lives at `{root}/graphql`)
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// User-Agent sent with every API request (GitHub rejects requests without one)
pub const USER_AGENT: &str = concat!("nfo-stats/", env!("CARGO_PKG_VERSION"));

/// Page size for paged REST listings
pub const REPOS_PER_PAGE: usize = 100;

// GitHub answers 202 while it computes contributor statistics
pub const CONTRIBUTOR_STATS_ATTEMPTS: usize = 3;
pub const CONTRIBUTOR_STATS_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Rendered card file names, relative to the work directory
pub const DARK_MODE_FILE: &str = "dark_mode.svg";
pub const LIGHT_MODE_FILE: &str = "light_mode.svg";

/// Cache layout, relative to the cache directory
pub const DEFAULT_CACHE_DIR: &str = "cache";
pub const STATS_CACHE_FILE: &str = "stats.json";
pub const GITHUB_CACHE_FILE: &str = "github_stats.json";

/// Session logs live under `~/<SESSIONS_SUBDIR>`
pub const SESSIONS_SUBDIR: &str = ".claude/projects";
pub const SESSION_LOG_EXTENSION: &str = "jsonl";

/// Version control defaults
pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_BRANCH: &str = "main";

/// Overlap protection
pub const LOCK_FILE: &str = ".nfo-stats.lock";
pub const STALE_LOCK_AGE: Duration = Duration::from_secs(60 * 60);

// Cost model in dollars per million tokens (cache reads are discounted 90%)
pub const INPUT_COST_PER_MTOK: f64 = 10.0;
pub const OUTPUT_COST_PER_MTOK: f64 = 30.0;
pub const CACHE_READ_COST_PER_MTOK: f64 = 1.0;
