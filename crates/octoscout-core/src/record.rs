use serde::{Deserialize, Serialize};

/// One scraped user profile, flattened for output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub login: String,
    pub name: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub hireable: Option<bool>,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: Option<String>,
}

/// One scraped repository, keyed back to its owner by `login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub login: String,
    pub full_name: String,
    pub created_at: Option<String>,
    pub stargazers_count: u32,
    pub watchers_count: u32,
    pub language: Option<String>,
    pub has_projects: bool,
    pub has_wiki: bool,
    pub license_name: Option<String>,
}

/// Clean and standardize a company name.
///
/// Trims the input, strips every literal `@`, upper-cases the result, and
/// collapses internal whitespace runs to a single space. `@` removal happens
/// before collapsing: dropping an `@` can leave a double space behind.
/// Returns `None` for absent, empty, or `@`-only input.
pub fn normalize_company(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    let cleaned = raw.trim().replace('@', "").to_uppercase();
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}
