//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Run configuration (CLI, environment and config file merging)
//! - Run statistics and exit status
//! - Progress display helpers
//!
//! Internal implementation details are not exposed through this API.

// Configuration
pub use super::config::{default_config_path, FileConfig, MirrorArgs, MirrorConfig};
pub use super::config::{DEFAULT_API_URL, STARS_PER_PAGE};
pub use super::config::{EXIT_FATAL, EXIT_ITEM_ERRORS, EXIT_SUCCESS};

// Statistics
pub use super::stats::{MirrorStatistics, RunStatus};

// Progress
pub use super::progress::{
    cloning_message, create_fetch_spinner, fetch_progress_message, found_stars_message,
};

// Terminal utilities (re-exported from utils)
pub use crate::utils::{set_terminal_title, set_terminal_title_and_flush};
