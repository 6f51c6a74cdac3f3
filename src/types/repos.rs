//! Repository data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::users::User;

/// A repository.
///
/// Two repositories are equal when their ids are.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Numeric repository id
    pub id: u64,
    pub node_id: Option<String>,
    /// Repository name without the owner
    pub name: String,
    /// `owner/name`
    pub full_name: Option<String>,
    pub owner: Option<User>,
    #[serde(rename = "private", default)]
    pub is_private: bool,
    #[serde(rename = "fork", default)]
    pub is_fork: bool,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub url: Option<String>,
    pub html_url: Option<String>,
    pub git_url: Option<String>,
    pub ssh_url: Option<String>,
    pub clone_url: Option<String>,
    pub svn_url: Option<String>,
    /// Size in kilobytes
    pub size: Option<u64>,
    pub stargazers_count: Option<u32>,
    pub watchers_count: Option<u32>,
    pub forks_count: Option<u32>,
    pub open_issues_count: Option<u32>,
    pub default_branch: Option<String>,
    pub has_issues: Option<bool>,
    pub has_wiki: Option<bool>,
    pub has_pages: Option<bool>,
    pub has_downloads: Option<bool>,
    pub archived: Option<bool>,
    pub disabled: Option<bool>,
    /// `public`, `private` or `internal`
    pub visibility: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub license: Option<License>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PartialEq for Repository {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Repository {}

/// License summary attached to a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub key: Option<String>,
    pub name: Option<String>,
    pub spdx_id: Option<String>,
    pub url: Option<String>,
    pub node_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_deserialize() {
        let json = r#"{
            "id": 1296269,
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "owner": {"login": "octocat", "id": 1},
            "private": false,
            "fork": true,
            "description": "This your first repo!",
            "clone_url": "https://github.com/octocat/Hello-World.git",
            "stargazers_count": 80,
            "default_branch": "master",
            "topics": ["octocat", "api"],
            "license": {"key": "mit", "name": "MIT License", "spdx_id": "MIT"},
            "pushed_at": "2011-01-26T19:06:43Z",
            "created_at": "2011-01-26T19:01:12Z"
        }"#;

        let repo: Repository = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(repo.id, 1_296_269);
        assert_eq!(repo.full_name.as_deref(), Some("octocat/Hello-World"));
        assert_eq!(repo.owner.map(|o| o.login), Some("octocat".to_string()));
        assert!(!repo.is_private);
        assert!(repo.is_fork);
        assert_eq!(repo.stargazers_count, Some(80));
        assert_eq!(repo.topics, vec!["octocat", "api"]);
        assert_eq!(repo.license.and_then(|l| l.spdx_id).as_deref(), Some("MIT"));
        assert!(repo.pushed_at.is_some());
    }

    #[test]
    fn test_private_defaults_to_false() {
        let repo: Repository =
            serde_json::from_str(r#"{"id": 3, "name": "x"}"#).expect("Should deserialize");
        assert!(!repo.is_private);
        assert!(repo.topics.is_empty());
    }
}
