use http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    #[error("GitHub rate limit exceeded")]
    RateLimited,

    #[error("malformed API item: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GitHubError>;

impl GitHubError {
    /// Fold rate-limit responses into the dedicated variant.
    pub(crate) fn classify(err: octocrab::Error) -> Self {
        if is_rate_limit_error(&err) {
            GitHubError::RateLimited
        } else {
            GitHubError::Api(err)
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, GitHubError::RateLimited)
    }

    /// True for failures scoped to a single user or repository item:
    /// the item is gone, hidden, or does not match the expected shape.
    /// These are skipped; everything else aborts the run.
    pub fn is_item_level(&self) -> bool {
        match self {
            GitHubError::Decode(_) => true,
            GitHubError::Api(octocrab::Error::GitHub { source, .. }) => matches!(
                source.status_code,
                StatusCode::NOT_FOUND
                    | StatusCode::GONE
                    | StatusCode::UNAVAILABLE_FOR_LEGAL_REASONS
            ),
            _ => false,
        }
    }
}

/// Check if an error indicates rate-limit exhaustion (HTTP 403 or 429).
pub fn is_rate_limit_error(e: &octocrab::Error) -> bool {
    match e {
        octocrab::Error::GitHub { source, .. } => {
            source.status_code == StatusCode::FORBIDDEN
                || source.status_code == StatusCode::TOO_MANY_REQUESTS
        }
        _ => false,
    }
}
