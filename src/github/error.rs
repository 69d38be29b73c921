//! GitHub API error types.

use thiserror::Error;

/// Errors that can occur while collecting stars from the GitHub API.
///
/// All of them end the run before any repository is mirrored.
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("hit the github api rate limit: {message}")]
    RateLimited { message: String, body: String },

    #[error("GitHub API error: {0}")]
    Api(String),

    #[error("invalid API URL {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GitHubError {
    /// Check if this error is GitHub's rate limit response.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, GitHubError::RateLimited { .. })
    }
}
