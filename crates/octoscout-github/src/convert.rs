//! Extraction from GitHub wire descriptors into flat output records.
//!
//! Pure field access; a missing optional field becomes `None`, never an
//! error. Timestamps are rendered as RFC 3339 strings.

use octoscout_core::{normalize_company, RepositoryRecord, UserRecord};

use crate::types::{ApiRepo, ApiUser};

pub fn user_record(user: &ApiUser) -> UserRecord {
    UserRecord {
        login: user.login.clone(),
        name: user.name.clone(),
        company: normalize_company(user.company.as_deref()),
        location: user.location.clone(),
        email: user.email.clone(),
        hireable: user.hireable,
        bio: user.bio.clone(),
        public_repos: user.public_repos,
        followers: user.followers,
        following: user.following,
        created_at: user.created_at.map(|dt| dt.to_rfc3339()),
    }
}

pub fn repo_record(login: &str, repo: &ApiRepo) -> RepositoryRecord {
    // A license object with an empty key counts as no license.
    let license_name = repo
        .license
        .as_ref()
        .and_then(|license| license.key.as_deref())
        .filter(|key| !key.is_empty())
        .map(String::from);

    RepositoryRecord {
        login: login.to_string(),
        full_name: repo.full_name.clone(),
        created_at: repo.created_at.map(|dt| dt.to_rfc3339()),
        stargazers_count: repo.stargazers_count,
        watchers_count: repo.watchers_count,
        language: repo.language.clone(),
        has_projects: repo.has_projects,
        has_wiki: repo.has_wiki,
        license_name,
    }
}
