//! GitHub API response types

use serde::{Deserialize, Serialize};

/// Account that owns a starred repository
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// One entry of `GET /users/{username}/starred`
///
/// Only the fields the mirror needs are decoded; the rest of the payload is
/// ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarredRepo {
    /// "owner/repo"
    pub full_name: String,
    pub clone_url: String,
    pub owner: Owner,
}

impl StarredRepo {
    pub fn owner_login(&self) -> &str {
        &self.owner.login
    }
}

/// One page of starred repositories, in API order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number
    pub number: u32,
    pub stars: Vec<StarredRepo>,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

/// Classified response body of a starred page request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StarPage {
    Stars(Page),
    /// GitHub answered with a rate-limit message instead of a list
    RateLimited {
        message: String,
        /// Raw response body, shown to the operator as-is
        body: String,
    },
}
