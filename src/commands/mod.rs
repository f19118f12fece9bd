//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod preview;
pub mod refresh;

// Re-export main command functions
pub use models::RefreshArgs;
pub use preview::{execute_open, execute_preview, OpenTarget};
pub use refresh::{execute_refresh, live_stats, refresh_with, validate_args, RefreshOutcome};
