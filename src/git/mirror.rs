//! Mirror clone execution and outcome classification

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;

use super::operations::run_git;
use super::status::CloneOutcome;
use crate::core::config::ALREADY_EXISTS_MARKER;

// `--` keeps a clone URL that starts with a dash from being read as an option
const GIT_CLONE_MIRROR_ARGS: &[&str] = &["clone", "--mirror", "--"];

/// Materializes one repository mirror inside a target directory
#[async_trait]
pub trait MirrorRunner: Send + Sync {
    /// Ensures `target_dir` exists, then mirror-clones `clone_url` into it
    ///
    /// Returns an error only when the clone could not be attempted at all
    /// (directory creation or process spawn failed). A clone that ran and
    /// failed is reported as [`CloneOutcome::Failed`].
    async fn mirror(&self, target_dir: &Path, clone_url: &str) -> Result<CloneOutcome>;
}

/// Runs `git clone --mirror` as a subprocess
#[derive(Clone, Copy, Debug, Default)]
pub struct GitMirror;

#[async_trait]
impl MirrorRunner for GitMirror {
    async fn mirror(&self, target_dir: &Path, clone_url: &str) -> Result<CloneOutcome> {
        // create_dir_all succeeds when the directory is already there
        tokio::fs::create_dir_all(target_dir)
            .await
            .with_context(|| format!("failed to create directory {}", target_dir.display()))?;

        let mut args = Vec::from(GIT_CLONE_MIRROR_ARGS);
        args.push(clone_url);

        let (exit_code, stdout, stderr) = run_git(target_dir, &args).await?;
        Ok(classify_clone(exit_code, stdout, stderr))
    }
}

/// Classifies a finished clone by exit code and stderr
///
/// "already exists" is matched as plain text in git's stderr. This is not a
/// structured signal and may change with git versions or locales.
pub fn classify_clone(exit_code: Option<i32>, stdout: String, stderr: String) -> CloneOutcome {
    match exit_code {
        Some(0) => CloneOutcome::Cloned,
        _ if stderr.contains(ALREADY_EXISTS_MARKER) => CloneOutcome::AlreadyExists,
        _ => CloneOutcome::Failed {
            exit_code,
            stdout,
            stderr,
        },
    }
}

/// Human-readable form of the clone command, used in error reports
pub fn mirror_command(clone_url: &str) -> String {
    format!("git {} '{}'", GIT_CLONE_MIRROR_ARGS.join(" "), clone_url)
}
