//! Statistics tracking for a mirror run

use crate::core::config::{
    ERROR_MESSAGE_MAX_LENGTH, ERROR_MESSAGE_TRUNCATE_LENGTH, EXIT_FATAL, EXIT_ITEM_ERRORS,
    EXIT_SUCCESS, PATH_DISPLAY_WIDTH,
};
use crate::git::CloneOutcome;
use std::time::Duration;

/// Final status of a run, mapped onto the process exit code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// Every repository was mirrored or already present
    Success,
    /// Stars could not be collected; nothing was mirrored
    Fatal,
    /// The batch finished but at least one repository failed
    ItemErrors,
}

impl RunStatus {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunStatus::Success => EXIT_SUCCESS,
            RunStatus::Fatal => EXIT_FATAL,
            RunStatus::ItemErrors => EXIT_ITEM_ERRORS,
        }
    }
}

/// Statistics for tracking mirror results
///
/// Owned by the batch loop and updated between sequential steps, so plain
/// counters are enough. The run is errored exactly when `failed_repos` is
/// non-empty.
#[derive(Clone, Debug, Default)]
pub struct MirrorStatistics {
    pub total_stars: usize,
    pub cloned_repos: u32,
    pub existing_repos: u32,
    pub failed_repos: Vec<(String, String, String)>, // (full_name, repo_path, error_message)
}

impl MirrorStatistics {
    /// Creates a new statistics tracker for a batch of `total_stars` repositories
    pub fn new(total_stars: usize) -> Self {
        Self {
            total_stars,
            ..Self::default()
        }
    }

    /// Updates statistics based on the clone outcome
    pub fn record_outcome(&mut self, full_name: &str, repo_path: &str, outcome: &CloneOutcome) {
        match outcome {
            CloneOutcome::Cloned => self.cloned_repos += 1,
            CloneOutcome::AlreadyExists => self.existing_repos += 1,
            CloneOutcome::Failed {
                exit_code, stderr, ..
            } => {
                let code = exit_code.map_or_else(|| "signal".to_string(), |c| c.to_string());
                let message = format!("exit {}: {}", code, clean_error_message(stderr));
                self.record_failure(full_name, repo_path, &message);
            }
        }
    }

    /// Records a repository that could not be mirrored
    pub fn record_failure(&mut self, full_name: &str, repo_path: &str, message: &str) {
        self.failed_repos.push((
            full_name.to_string(),
            repo_path.to_string(),
            message.to_string(),
        ));
    }

    pub fn error_repos(&self) -> usize {
        self.failed_repos.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.failed_repos.is_empty()
    }

    /// Status of the finished batch
    pub fn run_status(&self) -> RunStatus {
        if self.has_errors() {
            RunStatus::ItemErrors
        } else {
            RunStatus::Success
        }
    }

    /// Generates a summary string of the mirror results
    pub fn generate_summary(&self, duration: Duration) -> String {
        let duration_secs = duration.as_secs_f64();

        if self.has_errors() {
            format!(
                "✅ Completed in {:.1}s • {} stars • {} cloned • {} already present • {} failed",
                duration_secs,
                self.total_stars,
                self.cloned_repos,
                self.existing_repos,
                self.error_repos()
            )
        } else {
            format!(
                "✅ Completed in {:.1}s • {} stars • {} cloned • {} already present",
                duration_secs, self.total_stars, self.cloned_repos, self.existing_repos
            )
        }
    }

    /// Generates the failure tree; empty when nothing failed
    pub fn generate_detailed_summary(&self) -> String {
        let mut lines = Vec::new();

        if !self.failed_repos.is_empty() {
            lines.push(format!("🔴 FAILED REPOS ({})", self.failed_repos.len()));
            for (i, (full_name, repo_path, error)) in self.failed_repos.iter().enumerate() {
                let tree_char = if i == self.failed_repos.len() - 1 {
                    "└─"
                } else {
                    "├─"
                };
                let short_path = crate::utils::shorten_path(repo_path, PATH_DISPLAY_WIDTH);
                lines.push(format!(
                    "   {} {:20} {:30} # {}",
                    tree_char, full_name, short_path, error
                ));
            }
        }

        lines.join("\n")
    }
}

/// Cleans and formats git error output for the summary tree
pub(crate) fn clean_error_message(error: &str) -> String {
    // Replace newlines/tabs with spaces and collapse whitespace
    let cleaned = error
        .replace('\n', " ")
        .replace('\r', "")
        .replace('\t', " ");
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    let lower = cleaned.to_lowercase();

    // Extract key error patterns
    if lower.contains("could not resolve host") || lower.contains("connection") {
        "network error".to_string()
    } else if lower.contains("repository not found") || lower.contains("not found") {
        "repository not found".to_string()
    } else if lower.contains("authentication") || lower.contains("permission denied") {
        "authentication failed".to_string()
    } else if lower.contains("no space left") {
        "disk full".to_string()
    } else if cleaned.chars().count() > ERROR_MESSAGE_MAX_LENGTH {
        let truncated: String = cleaned.chars().take(ERROR_MESSAGE_TRUNCATE_LENGTH).collect();
        format!("{truncated}...")
    } else {
        cleaned
    }
}
