use serde::{Deserialize, Serialize};

/// Defaults matching the public-data crawl this tool was built for.
pub const DEFAULT_LOCATION: &str = "Singapore";
pub const DEFAULT_MIN_FOLLOWERS: u32 = 100;
pub const DEFAULT_MAX_REPOS_PER_USER: usize = 500;

/// Knobs for one scrape run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Location filter for the user search.
    pub location: String,
    /// Minimum follower count for the user search.
    pub min_followers: u32,
    /// Upper bound on repositories extracted per user.
    pub max_repos_per_user: usize,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            min_followers: DEFAULT_MIN_FOLLOWERS,
            max_repos_per_user: DEFAULT_MAX_REPOS_PER_USER,
        }
    }
}

impl ScrapeConfig {
    pub fn with_location(mut self, location: String) -> Self {
        self.location = location;
        self
    }

    pub fn with_min_followers(mut self, min_followers: u32) -> Self {
        self.min_followers = min_followers;
        self
    }

    pub fn with_max_repos_per_user(mut self, max_repos_per_user: usize) -> Self {
        self.max_repos_per_user = max_repos_per_user;
        self
    }

    /// The GitHub search qualifier string for this configuration.
    pub fn search_query(&self) -> String {
        format!(
            "location:{} followers:>{}",
            self.location, self.min_followers
        )
    }
}
