//! nfo-stats
//!
//! Regenerates two NFO-style SVG stat cards for a GitHub profile README
//! and publishes them only when they change.
//!
//! This crate provides the core implementation for the `nfo-stats` CLI:
//! stats collection, card rendering, and the publish guard.
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install --path .
//! GITHUB_TOKEN=... nfo-stats          # render, then commit + push if changed
//! nfo-stats preview --fetch --save    # look at the card in the terminal
//! ```

pub mod commands;
pub mod github;
pub mod output;
pub mod publish;
pub mod render;
pub mod stats;
pub mod utils;
