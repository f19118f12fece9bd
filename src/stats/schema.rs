//! Stats snapshot definitions.
//!
//! Field names match the on-disk cache format, so a snapshot can be
//! written to `cache/stats.json` and read back on a later run.

use serde::{Deserialize, Serialize};

/// Everything one run needs to render the cards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub claude: ClaudeStats,
    pub github: GithubStats,
}

/// Token usage summed over the local session logs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaudeStats {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub cache_creation: u64,
    #[serde(default)]
    pub cache_read: u64,
    #[serde(default)]
    pub total_tokens: u64,
    #[serde(default)]
    pub sessions: u64,
    #[serde(default)]
    pub messages: u64,
    #[serde(default)]
    pub cost_estimate: f64,
}

/// Account-level GitHub numbers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GithubStats {
    #[serde(default)]
    pub repos: u64,
    #[serde(default)]
    pub commits: u64,
    #[serde(default)]
    pub stars: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub contributed_repos: u64,
    #[serde(default)]
    pub prs: u64,
    #[serde(default)]
    pub issues: u64,
    #[serde(default)]
    pub loc_added: u64,
    #[serde(default)]
    pub loc_deleted: u64,
    /// Net lines (added minus deleted), may be negative
    #[serde(default)]
    pub loc_total: i64,
}

/// Line totals for one author across repositories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    pub added: u64,
    pub deleted: u64,
}

impl LineStats {
    pub fn net(&self) -> i64 {
        self.added as i64 - self.deleted as i64
    }
}
