//! # star-mirror
//!
//! `star-mirror` fetches every repository a GitHub user has starred and
//! mirrors each one to local disk with `git clone --mirror`. It powers the
//! `star-mirror` CLI tool.
//!
//! ## Core Features
//!
//! - **Full Pagination**: Walks the starred endpoint page by page until the API runs dry.
//! - **Rate Limit Detection**: Stops the run with a distinct exit status when GitHub throttles us.
//! - **Path Containment**: Owner directories can never escape the configured base directory.
//! - **Failure Isolation**: One broken clone never stops the rest of the batch.
//!
//! ## Example
//!
//! ```rust,no_run
//! use star_mirror::github::{collect_stars, GitHubClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GitHubClient::new("https://api.github.com", None)?;
//!     let stars = collect_stars(&client, "octocat").await?;
//!     for star in stars {
//!         println!("{} -> {}", star.full_name, star.clone_url);
//!     }
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod core;
pub mod git;
pub mod github;
pub mod utils;
