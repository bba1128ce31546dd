use octocrab::Octocrab;
use serde::Serialize;

use crate::error::{GitHubError, Result};
use crate::page::{RepoPages, UserSearchPages, PER_PAGE};
use crate::types::{ApiUser, RateLimitResponse, RateLimits, SearchPage};

#[derive(Serialize)]
struct SearchParams<'a> {
    q: &'a str,
    per_page: u8,
    page: u32,
}

#[derive(Serialize)]
struct RepoListParams {
    #[serde(rename = "type")]
    visibility: &'static str,
    sort: &'static str,
    direction: &'static str,
    per_page: u8,
    page: u32,
}

/// Authenticated GitHub API client. Cheap to clone; owned by the caller and
/// released by scope on every exit path.
#[derive(Clone)]
pub struct GitHubClient {
    inner: Octocrab,
}

impl GitHubClient {
    pub fn new(token: String) -> Result<Self> {
        let inner = Octocrab::builder().personal_token(token).build()?;

        Ok(Self { inner })
    }

    /// Client against a non-default API host (GitHub Enterprise, tests).
    pub fn with_base_uri(token: String, base_uri: &str) -> Result<Self> {
        let inner = Octocrab::builder()
            .base_uri(base_uri)?
            .personal_token(token)
            .build()?;

        Ok(Self { inner })
    }

    /// Lazy stream of users matching a search query, in server order.
    pub fn search_users(&self, query: &str) -> UserSearchPages {
        UserSearchPages::new(self.clone(), query.to_string())
    }

    /// Lazy stream of a user's repositories, most recently pushed first,
    /// across all repository types.
    pub fn user_repos(&self, login: &str) -> RepoPages {
        RepoPages::new(self.clone(), login.to_string())
    }

    /// Hydrate one full user profile.
    pub async fn user(&self, login: &str) -> Result<ApiUser> {
        self.inner
            .get(format!("/users/{login}"), None::<&()>)
            .await
            .map_err(GitHubError::classify)
    }

    /// Current core and search rate-limit status for the token.
    pub async fn rate_limit(&self) -> Result<RateLimits> {
        let response: RateLimitResponse = self
            .inner
            .get("/rate_limit", None::<&()>)
            .await
            .map_err(GitHubError::classify)?;

        Ok(response.resources)
    }

    pub(crate) async fn search_users_page(&self, query: &str, page: u32) -> Result<SearchPage> {
        self.inner
            .get(
                "/search/users",
                Some(&SearchParams {
                    q: query,
                    per_page: PER_PAGE,
                    page,
                }),
            )
            .await
            .map_err(GitHubError::classify)
    }

    pub(crate) async fn user_repos_page(
        &self,
        login: &str,
        page: u32,
    ) -> Result<Vec<serde_json::Value>> {
        self.inner
            .get(
                format!("/users/{login}/repos"),
                Some(&RepoListParams {
                    visibility: "all",
                    sort: "pushed",
                    direction: "desc",
                    per_page: PER_PAGE,
                    page,
                }),
            )
            .await
            .map_err(GitHubError::classify)
    }
}
