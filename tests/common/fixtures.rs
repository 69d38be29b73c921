//! Test fixtures and builders

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use star_mirror::github::{Owner, StarredRepo};

use super::git::{create_test_commit, setup_git_repo};

/// Builds a starred repo entry the way the API would return it
pub fn star(owner: &str, name: &str, clone_url: &str) -> StarredRepo {
    StarredRepo {
        full_name: format!("{owner}/{name}"),
        clone_url: clone_url.to_string(),
        owner: Owner {
            login: owner.to_string(),
        },
    }
}

/// Serializes stars into a JSON page body
pub fn page_body(stars: &[StarredRepo]) -> String {
    serde_json::to_string(stars).unwrap_or_else(|_| "[]".to_string())
}

/// Local "upstream" repositories that can be mirror-cloned over the file protocol
pub struct UpstreamRepos {
    pub temp_dir: TempDir,
    names: Vec<String>,
}

impl UpstreamRepos {
    /// Creates `count` upstream repositories, each with one commit
    pub fn create(count: usize) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let mut names = Vec::with_capacity(count);

        for i in 0..count {
            let name = format!("upstream-{}", i + 1);
            let repo_path = temp_dir.path().join(&name);
            std::fs::create_dir(&repo_path)?;
            setup_git_repo(&repo_path)?;
            create_test_commit(
                &repo_path,
                "README.md",
                &format!("# Repo {}", i + 1),
                "Initial commit",
            )?;
            names.push(name);
        }

        Ok(Self { temp_dir, names })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path usable as a clone URL for the named upstream
    pub fn clone_url(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    /// One star per upstream, all owned by `owner`
    pub fn stars(&self, owner: &str) -> Vec<StarredRepo> {
        self.names
            .iter()
            .map(|name| star(owner, name, &self.clone_url(name).to_string_lossy()))
            .collect()
    }
}
