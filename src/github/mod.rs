pub mod client;
pub mod collector;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use client::{classify_page, GitHubClient, PageFetcher};
pub use collector::{collect_stars, collect_stars_with_progress};
pub use error::GitHubError;
pub use types::{Owner, Page, StarPage, StarredRepo};
