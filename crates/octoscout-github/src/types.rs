//! GitHub API wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One page of `/search/users` results.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    /// Total matches for the query across all pages.
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<SearchUser>,
}

/// A single user item from the search results. Search items carry only a
/// login stub; the full profile comes from a follow-up `/users/{login}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchUser {
    pub login: String,
    #[serde(default)]
    pub id: u64,
}

/// A full user profile from `/users/{login}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiUser {
    pub login: String,
    pub name: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub hireable: Option<bool>,
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub created_at: Option<DateTime<Utc>>,
}

/// A repository from `/users/{login}/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiRepo {
    pub full_name: String,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub watchers_count: u32,
    pub language: Option<String>,
    #[serde(default)]
    pub has_projects: bool,
    #[serde(default)]
    pub has_wiki: bool,
    pub license: Option<ApiLicense>,
}

/// The license object attached to a repository, when present.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiLicense {
    #[serde(default)]
    pub key: Option<String>,
}

/// A single rate limit resource entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitResource {
    /// Maximum requests allowed per period.
    pub limit: u64,
    /// Requests used in the current period.
    #[serde(default)]
    pub used: u64,
    /// Remaining requests in the current period.
    pub remaining: u64,
    /// Unix timestamp when the rate limit resets.
    pub reset: u64,
}

impl RateLimitResource {
    /// Reset time as a DateTime.
    pub fn reset_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.reset as i64, 0).unwrap_or_else(Utc::now)
    }
}

/// The rate limit resources this tool consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimits {
    /// Non-search REST endpoints.
    pub core: RateLimitResource,
    /// The search API, metered separately.
    pub search: RateLimitResource,
}

/// Full response from `/rate_limit`.
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitResponse {
    pub resources: RateLimits,
}
