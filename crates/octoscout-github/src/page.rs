//! Lazy page-at-a-time streams over paginated GitHub endpoints.
//!
//! Both streams fetch one page per request, buffer its items, and yield them
//! one at a time through `try_next`. A short page (fewer than `PER_PAGE`
//! items) ends the stream; the search stream additionally stops once the
//! server-reported total match count has been yielded. Streams are finite
//! and not restartable without re-issuing the request.

use std::collections::VecDeque;

use crate::client::GitHubClient;
use crate::error::Result;
use crate::types::SearchUser;

/// Items requested per page, the API maximum.
pub(crate) const PER_PAGE: u8 = 100;

/// Server-paginated stream of user-search matches.
pub struct UserSearchPages {
    client: GitHubClient,
    query: String,
    page: u32,
    buffer: VecDeque<SearchUser>,
    yielded: u64,
    total_count: Option<u64>,
    done: bool,
}

impl UserSearchPages {
    pub(crate) fn new(client: GitHubClient, query: String) -> Self {
        Self {
            client,
            query,
            page: 1,
            buffer: VecDeque::new(),
            yielded: 0,
            total_count: None,
            done: false,
        }
    }

    /// Total match count reported by the server. `None` until the first
    /// page has been fetched.
    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// Next matched user, or `None` when the sequence is exhausted.
    pub async fn try_next(&mut self) -> Result<Option<SearchUser>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                self.yielded += 1;
                return Ok(Some(item));
            }
            if self.done {
                return Ok(None);
            }

            let page = self
                .client
                .search_users_page(&self.query, self.page)
                .await?;
            self.total_count.get_or_insert(page.total_count);

            let count = page.items.len();
            tracing::debug!("Fetched search page {}: {} items", self.page, count);
            self.buffer.extend(page.items);
            self.page += 1;

            if count < PER_PAGE as usize {
                self.done = true;
            }
            if let Some(total) = self.total_count {
                if self.yielded + self.buffer.len() as u64 >= total {
                    self.done = true;
                }
            }
            if count == 0 && self.buffer.is_empty() {
                return Ok(None);
            }
        }
    }
}

/// Server-paginated stream of one user's repositories.
///
/// Items are raw JSON values so the caller can decode each one
/// individually and skip a malformed item without losing its page.
pub struct RepoPages {
    client: GitHubClient,
    login: String,
    page: u32,
    buffer: VecDeque<serde_json::Value>,
    done: bool,
}

impl RepoPages {
    pub(crate) fn new(client: GitHubClient, login: String) -> Self {
        Self {
            client,
            login,
            page: 1,
            buffer: VecDeque::new(),
            done: false,
        }
    }

    /// Next repository item, or `None` when the listing is exhausted.
    pub async fn try_next(&mut self) -> Result<Option<serde_json::Value>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }
            if self.done {
                return Ok(None);
            }

            let items = self
                .client
                .user_repos_page(&self.login, self.page)
                .await?;

            let count = items.len();
            tracing::debug!(
                "Fetched repos page {} for {}: {} items",
                self.page,
                self.login,
                count
            );
            self.buffer.extend(items);
            self.page += 1;

            if count < PER_PAGE as usize {
                self.done = true;
            }
            if count == 0 {
                return Ok(None);
            }
        }
    }
}
