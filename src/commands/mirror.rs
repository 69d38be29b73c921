//! Star mirroring command implementation
//!
//! This module drives a whole run: it collects every starred repository for a
//! user, then mirrors each one under `{base_dir}/{owner}` one at a time. A
//! failing repository is reported and skipped; only a failure to collect the
//! stars ends the run early.

use anyhow::Result;
use std::path::Path;
use std::time::Instant;

use crate::core::{
    cloning_message, create_fetch_spinner, fetch_progress_message, found_stars_message,
    set_terminal_title, set_terminal_title_and_flush, MirrorConfig, MirrorStatistics, RunStatus,
};
use crate::git::{is_git_available, mirror_command, CloneOutcome, GitMirror, MirrorRunner};
use crate::github::{collect_stars_with_progress, GitHubClient, GitHubError, PageFetcher, StarredRepo};
use crate::utils::{resolve_owner_dir, PathError};

/// Handles the mirror command with the real GitHub client and git
pub async fn handle_mirror_command(config: &MirrorConfig) -> Result<RunStatus> {
    // Set terminal title to indicate star-mirror is running
    set_terminal_title("⭐ star-mirror");

    let client = GitHubClient::new(&config.api_url, config.token.clone())?;
    if !client.is_authenticated() {
        log::info!("no token configured, using unauthenticated API rate limits");
    }
    if !is_git_available().await {
        log::warn!("git was not found on PATH, every clone will fail");
    }

    let status = run_mirror(&client, &GitMirror, &config.username, &config.base_dir).await;

    // Set terminal title to green checkbox to indicate completion
    set_terminal_title_and_flush("✅ star-mirror");

    Ok(status)
}

/// Collects the stars of `username` and mirrors them under `base_dir`
pub async fn run_mirror<F, M>(fetcher: &F, runner: &M, username: &str, base_dir: &Path) -> RunStatus
where
    F: PageFetcher + ?Sized,
    M: MirrorRunner + ?Sized,
{
    let start_time = Instant::now();

    let stars = match collect_with_spinner(fetcher, username).await {
        Ok(stars) => stars,
        Err(e) => {
            report_fetch_error(username, &e);
            return RunStatus::Fatal;
        }
    };

    println!("{}", found_stars_message(stars.len(), username));

    let statistics = mirror_stars(&stars, base_dir, runner).await;

    println!();
    println!("{}", statistics.generate_summary(start_time.elapsed()));
    let detailed_summary = statistics.generate_detailed_summary();
    if !detailed_summary.is_empty() {
        println!("\n{}", "━".repeat(70));
        println!("{}", detailed_summary);
        println!("{}", "━".repeat(70));
    }

    statistics.run_status()
}

async fn collect_with_spinner<F>(fetcher: &F, username: &str) -> Result<Vec<StarredRepo>, GitHubError>
where
    F: PageFetcher + ?Sized,
{
    let spinner = match create_fetch_spinner(username) {
        Ok(spinner) => Some(spinner),
        Err(e) => {
            log::warn!("progress display unavailable: {}", e);
            None
        }
    };

    let result = collect_stars_with_progress(fetcher, username, |page, stars_so_far| {
        if let Some(spinner) = &spinner {
            spinner.set_message(fetch_progress_message(username, page, stars_so_far));
        }
    })
    .await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    result
}

fn report_fetch_error(username: &str, error: &GitHubError) {
    match error {
        GitHubError::RateLimited { body, .. } => {
            println!("hit the github api rate limit");
            println!("{}", body);
        }
        other => {
            eprintln!("ERROR: Failed to fetch stars for {}: {}", username, other);
        }
    }
}

/// Mirrors each star in order, isolating failures per repository
///
/// Returns the run statistics; the run is errored when any repository failed
/// path containment or cloning.
pub async fn mirror_stars<M>(stars: &[StarredRepo], base_dir: &Path, runner: &M) -> MirrorStatistics
where
    M: MirrorRunner + ?Sized,
{
    let total = stars.len();
    let mut statistics = MirrorStatistics::new(total);

    for (index, star) in stars.iter().enumerate() {
        let count = index + 1;

        let repo_path = match resolve_owner_dir(base_dir, star.owner_login()) {
            Ok(path) => path,
            Err(PathError::OutsideBase { path, base }) => {
                eprintln!(
                    "ERROR: Filename {} is not in {} directory. Skipping Repo {}.",
                    path.display(),
                    base.display(),
                    star.full_name
                );
                statistics.record_failure(
                    &star.full_name,
                    &path.to_string_lossy(),
                    "path escapes base directory",
                );
                continue;
            }
            Err(e) => {
                eprintln!("ERROR: {}. Skipping Repo {}.", e, star.full_name);
                statistics.record_failure(
                    &star.full_name,
                    &base_dir.to_string_lossy(),
                    &e.to_string(),
                );
                continue;
            }
        };
        let repo_path_str = repo_path.to_string_lossy();

        println!("{}", cloning_message(&star.full_name, count, total));

        match runner.mirror(&repo_path, &star.clone_url).await {
            Ok(outcome) => {
                if let CloneOutcome::Failed {
                    exit_code,
                    stdout,
                    stderr,
                } = &outcome
                {
                    let code = exit_code.map_or_else(|| "signal".to_string(), |c| c.to_string());
                    eprintln!(
                        "ERROR: Command \"{}\" failed with {} and:\n{}\n{}",
                        mirror_command(&star.clone_url),
                        code,
                        stdout,
                        stderr
                    );
                } else {
                    log::debug!("{} {} {}", outcome.symbol(), star.full_name, outcome.text());
                }
                statistics.record_outcome(&star.full_name, &repo_path_str, &outcome);
            }
            Err(e) => {
                eprintln!("ERROR: Could not mirror {}: {:#}", star.full_name, e);
                statistics.record_failure(&star.full_name, &repo_path_str, &format!("{e:#}"));
            }
        }
    }

    statistics
}
