//! The sequential scrape traversal.
//!
//! One pass over the user-search results; per matched user, one pass over
//! that user's repositories up to the configured cap. Item failures are
//! skipped with a warning, rate-limit exhaustion stops the whole traversal
//! while keeping everything gathered so far, and any other failure aborts
//! the run with nothing persisted.

use octoscout_core::{RepositoryRecord, ScrapeConfig, UserRecord};
use octoscout_github::{convert, types::ApiRepo, GitHubClient};

use crate::error::Result;

/// Everything one run gathered, in encounter order.
#[derive(Debug, Default)]
pub struct ScrapeOutcome {
    pub users: Vec<UserRecord>,
    pub repositories: Vec<RepositoryRecord>,
    /// True when the traversal stopped early on rate-limit exhaustion.
    pub rate_limited: bool,
}

pub struct Scraper {
    client: GitHubClient,
    config: ScrapeConfig,
}

impl Scraper {
    pub fn new(client: GitHubClient, config: ScrapeConfig) -> Self {
        Self { client, config }
    }

    pub async fn run(&self) -> Result<ScrapeOutcome> {
        let query = self.config.search_query();
        tracing::info!("Searching users: {}", query);

        let mut search = self.client.search_users(&query);
        let mut outcome = ScrapeOutcome::default();
        let mut announced_total = false;

        'users: loop {
            let next = search.try_next().await;

            if !announced_total {
                if let Some(total) = search.total_count() {
                    tracing::info!("Found {} matching users", total);
                    announced_total = true;
                }
            }

            let stub = match next {
                Ok(Some(stub)) => stub,
                Ok(None) => break,
                Err(e) if e.is_rate_limited() => {
                    tracing::error!("GitHub API rate limit exceeded");
                    outcome.rate_limited = true;
                    break;
                }
                Err(e) => return Err(e.into()),
            };

            // Search items carry only a login stub; hydrate the full profile.
            let user = match self.client.user(&stub.login).await {
                Ok(user) => user,
                Err(e) if e.is_rate_limited() => {
                    tracing::error!("GitHub API rate limit exceeded");
                    outcome.rate_limited = true;
                    break;
                }
                Err(e) if e.is_item_level() => {
                    tracing::warn!("Error processing user {}: {}", stub.login, e);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let record = convert::user_record(&user);
            let company = record.company.clone();
            outcome.users.push(record);

            let mut repos = self.client.user_repos(&stub.login);
            let mut repo_count = 0usize;

            while repo_count < self.config.max_repos_per_user {
                let item = match repos.try_next().await {
                    Ok(Some(item)) => item,
                    Ok(None) => break,
                    Err(e) if e.is_rate_limited() => {
                        tracing::error!("GitHub API rate limit exceeded");
                        outcome.rate_limited = true;
                        break 'users;
                    }
                    Err(e) if e.is_item_level() => {
                        tracing::warn!("Error listing repos for {}: {}", stub.login, e);
                        break;
                    }
                    Err(e) => return Err(e.into()),
                };

                // Decode items one at a time so a malformed repository is
                // skipped without counting toward the cap.
                let repo: ApiRepo = match serde_json::from_value(item) {
                    Ok(repo) => repo,
                    Err(e) => {
                        tracing::warn!("Error processing repo for {}: {}", stub.login, e);
                        continue;
                    }
                };

                let repo_record = convert::repo_record(&stub.login, &repo);
                repo_count += 1;
                tracing::debug!(
                    "Processed repo {}, count: {}",
                    repo_record.full_name,
                    repo_count
                );
                outcome.repositories.push(repo_record);
            }

            tracing::info!(
                "Processed user {} (company: {})",
                user.name.as_deref().unwrap_or(&user.login),
                company.as_deref().unwrap_or("-")
            );
        }

        tracing::info!(
            "Scrape complete: {} users, {} repositories{}",
            outcome.users.len(),
            outcome.repositories.len(),
            if outcome.rate_limited {
                " (stopped early on rate limit)"
            } else {
                ""
            }
        );

        Ok(outcome)
    }
}
