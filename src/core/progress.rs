//! Progress display while collecting stars

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::config::{FETCH_SPINNER_TEMPLATE, FETCH_SPINNER_TICK_MS};

/// Creates a spinner style configuration
pub(crate) fn create_spinner_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::default_spinner().template(FETCH_SPINNER_TEMPLATE)?)
}

/// Creates the spinner shown while pages are being fetched
///
/// indicatif hides the spinner when stderr is not a terminal.
pub fn create_fetch_spinner(username: &str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(create_spinner_style()?);
    spinner.set_message(format!("🔍 Fetching stars for {username}..."));
    spinner.enable_steady_tick(Duration::from_millis(FETCH_SPINNER_TICK_MS));
    Ok(spinner)
}

/// Message shown after each non-empty page
pub fn fetch_progress_message(username: &str, page: u32, stars_so_far: usize) -> String {
    format!("🔍 Fetching stars for {username}... page {page} ({stars_so_far} so far)")
}

/// Line printed once collection has finished
pub fn found_stars_message(count: usize, username: &str) -> String {
    format!("Found {count} stars for {username}.")
}

/// Line printed before each clone; `position` is 1-based
pub fn cloning_message(full_name: &str, position: usize, total: usize) -> String {
    format!("Cloning {full_name} ({position}/{total})...")
}
