//! Token usage from local assistant session logs.
//!
//! Each `*.jsonl` file under the sessions directory is one session. Records
//! carrying a non-empty `message.usage` object count as one message and
//! contribute their token counts. Unreadable files and malformed lines are
//! skipped.

use super::schema::ClaudeStats;
use crate::utils::config::{
    CACHE_READ_COST_PER_MTOK, INPUT_COST_PER_MTOK, OUTPUT_COST_PER_MTOK, SESSION_LOG_EXTENSION,
};
use log::{debug, warn};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use walkdir::WalkDir;

/// Scan a sessions directory and sum token usage
///
/// A missing directory yields zeroed stats (`sessions == 0`).
pub fn scan_sessions(sessions_dir: &Path) -> ClaudeStats {
    let mut stats = ClaudeStats::default();

    if !sessions_dir.exists() {
        debug!("Sessions directory not found: {}", sessions_dir.display());
        return stats;
    }

    let logs = WalkDir::new(sessions_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext == SESSION_LOG_EXTENSION)
        });

    for entry in logs {
        stats.sessions += 1;

        let file = match File::open(entry.path()) {
            Ok(file) => file,
            Err(e) => {
                warn!("Skipping unreadable session log {}: {}", entry.path().display(), e);
                continue;
            }
        };

        for line in BufReader::new(file).lines() {
            // Stop on I/O errors (e.g. invalid UTF-8), keep what we have
            let Ok(line) = line else { break };
            accumulate_record(&mut stats, &line);
        }
    }

    finalize(&mut stats);

    debug!(
        "Scanned {} sessions, {} messages, {} tokens",
        stats.sessions, stats.messages, stats.total_tokens
    );

    stats
}

/// Fold one JSONL record into the running totals
fn accumulate_record(stats: &mut ClaudeStats, line: &str) {
    let Ok(record) = serde_json::from_str::<Value>(line) else {
        return;
    };

    let Some(usage) = record
        .get("message")
        .filter(|m| m.is_object())
        .and_then(|m| m.get("usage"))
        .and_then(Value::as_object)
    else {
        return;
    };

    if usage.is_empty() {
        return;
    }

    let field = |name: &str| usage.get(name).and_then(Value::as_u64).unwrap_or(0);

    stats.messages += 1;
    stats.input_tokens += field("input_tokens");
    stats.output_tokens += field("output_tokens");
    stats.cache_creation += field("cache_creation_input_tokens");
    stats.cache_read += field("cache_read_input_tokens");
}

/// Derive total and cost from the raw counters
fn finalize(stats: &mut ClaudeStats) {
    stats.total_tokens =
        stats.input_tokens + stats.output_tokens + stats.cache_creation + stats.cache_read;
    stats.cost_estimate = estimate_cost(stats);
}

/// Estimated API cost in dollars
pub fn estimate_cost(stats: &ClaudeStats) -> f64 {
    let per_token = |count: u64, rate: f64| count as f64 * rate / 1_000_000.0;

    per_token(stats.input_tokens + stats.cache_creation, INPUT_COST_PER_MTOK)
        + per_token(stats.output_tokens, OUTPUT_COST_PER_MTOK)
        + per_token(stats.cache_read, CACHE_READ_COST_PER_MTOK)
}
