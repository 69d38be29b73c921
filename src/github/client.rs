//! GitHub API client for the starred repositories endpoint.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Url;
use serde_json::Value;

use super::error::GitHubError;
use super::types::{Page, StarPage, StarredRepo};
use crate::core::config::{GITHUB_ACCEPT_HEADER, RATE_LIMIT_MARKER, STARS_PER_PAGE, USER_AGENT};

/// Fetches a single page of a user's starred repositories.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch 1-based `page` of `username`'s stars and classify the response.
    async fn fetch_page(&self, username: &str, page: u32) -> Result<StarPage, GitHubError>;
}

/// HTTP client for the GitHub REST API.
#[derive(Clone, Debug)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: Url,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client for `api_url`, optionally authenticated with a bearer token.
    pub fn new(api_url: &str, token: Option<String>) -> Result<Self, GitHubError> {
        let api_url = Url::parse(api_url)
            .map_err(|e| GitHubError::InvalidUrl(format!("{api_url}: {e}")))?;
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            api_url,
            token,
        })
    }

    /// URL of the starred endpoint for `username`, without query parameters.
    ///
    /// The username is appended as a single percent-encoded path segment, so
    /// it can never address a different endpoint.
    pub fn starred_url(&self, username: &str) -> Result<Url, GitHubError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| GitHubError::InvalidUrl(self.api_url.to_string()))?
            .pop_if_empty()
            .push("users")
            .push(username)
            .push("starred");
        Ok(url)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[async_trait]
impl PageFetcher for GitHubClient {
    async fn fetch_page(&self, username: &str, page: u32) -> Result<StarPage, GitHubError> {
        let mut request = self
            .http
            .get(self.starred_url(username)?)
            .header(ACCEPT, GITHUB_ACCEPT_HEADER)
            .query(&[("per_page", STARS_PER_PAGE), ("page", page)]);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        // A rate-limited response is a 403 with a JSON body, so the status
        // code is only logged and the body decides.
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        log::debug!(
            "GET starred page {} for {}: HTTP {} ({} bytes)",
            page,
            username,
            status,
            body.len()
        );

        classify_page(page, &body)
    }
}

/// Decode a starred page body and classify it.
///
/// The object shape is checked before the list shape: GitHub reports rate
/// limiting as `{"message": "API rate limit exceeded ..."}`.
pub fn classify_page(number: u32, body: &str) -> Result<StarPage, GitHubError> {
    let value: Value = serde_json::from_str(body)?;

    if let Some(object) = value.as_object() {
        let message = object
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default();

        if message.contains(RATE_LIMIT_MARKER) {
            return Ok(StarPage::RateLimited {
                message: message.to_string(),
                body: body.to_string(),
            });
        }

        let reason = if message.is_empty() {
            body.trim().to_string()
        } else {
            message.to_string()
        };
        return Err(GitHubError::Api(reason));
    }

    let stars: Vec<StarredRepo> = serde_json::from_value(value)?;
    Ok(StarPage::Stars(Page { number, stars }))
}
