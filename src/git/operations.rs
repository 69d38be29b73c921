//! Basic git operations and command execution

use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command;

/// Runs a git command in the specified directory
/// Returns (exit_code, stdout, stderr)
///
/// No timeout is applied: a hung git process blocks the caller until it exits.
/// The exit code is `None` when git was terminated by a signal.
pub async fn run_git(path: &Path, args: &[&str]) -> Result<(Option<i32>, String, String)> {
    log::debug!("running git {} in {}", args.join(" "), path.display());

    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .await
        .with_context(|| format!("failed to run git in {}", path.display()))?;

    Ok((
        output.status.code(),
        String::from_utf8_lossy(&output.stdout).trim().to_string(),
        String::from_utf8_lossy(&output.stderr).trim().to_string(),
    ))
}

/// Checks if git is available on PATH
pub async fn is_git_available() -> bool {
    match Command::new("git").arg("--version").output().await {
        Ok(output) => output.status.success(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_run_git_reports_exit_code_and_output() {
        if !is_git_available().await {
            eprintln!("Git not available, skipping test");
            return;
        }
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let (code, stdout, _) = run_git(temp_dir.path(), &["--version"])
            .await
            .expect("git --version should run");
        assert_eq!(code, Some(0));
        assert!(stdout.starts_with("git version"));

        // Not a repository: git exits non-zero and explains on stderr
        let (code, _, stderr) = run_git(temp_dir.path(), &["rev-parse", "HEAD"])
            .await
            .expect("git should run");
        assert_ne!(code, Some(0));
        assert!(!stderr.is_empty());
    }

    #[tokio::test]
    async fn test_run_git_in_missing_directory_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let missing = temp_dir.path().join("does-not-exist");

        assert!(run_git(&missing, &["--version"]).await.is_err());
    }
}
