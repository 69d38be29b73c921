//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod git;
pub mod server;

pub use self::fixtures::{page_body, star, UpstreamRepos};
pub use self::git::{is_bare_repo, is_git_available, setup_git_repo};
pub use self::server::{MockGitHub, Responder};
