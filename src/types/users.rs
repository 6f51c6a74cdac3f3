//! User data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub account, as returned by `/user`, `/users/{name}` and embedded
/// in most other resources.
///
/// Two users are equal when their ids are.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Numeric account id
    pub id: u64,
    /// Login name
    #[serde(default)]
    pub login: String,
    pub node_id: Option<String>,
    pub avatar_url: Option<String>,
    pub gravatar_id: Option<String>,
    pub url: Option<String>,
    pub html_url: Option<String>,
    pub followers_url: Option<String>,
    pub following_url: Option<String>,
    pub gists_url: Option<String>,
    pub starred_url: Option<String>,
    pub repos_url: Option<String>,
    /// `User`, `Organization` or `Bot`
    #[serde(rename = "type")]
    pub user_type: Option<String>,
    pub site_admin: Option<bool>,
    /// Display name
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub hireable: Option<bool>,
    pub bio: Option<String>,
    pub twitter_username: Option<String>,
    pub public_repos: Option<u32>,
    pub public_gists: Option<u32>,
    pub followers: Option<u32>,
    pub following: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Only present for the authenticated user
    pub private_gists: Option<u32>,
    pub total_private_repos: Option<u32>,
    pub owned_private_repos: Option<u32>,
    pub disk_usage: Option<u64>,
    pub collaborators: Option<u32>,
    #[serde(rename = "two_factor_authentication")]
    pub two_factor_authentication_enabled: Option<bool>,
    pub plan: Option<Plan>,
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

/// Billing plan of the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub name: Option<String>,
    pub space: Option<u64>,
    pub private_repos: Option<u64>,
    pub collaborators: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialize() {
        let json = r#"{
            "login": "octocat",
            "id": 1,
            "avatar_url": "https://github.com/images/error/octocat_happy.gif",
            "type": "User",
            "site_admin": false,
            "name": "monalisa octocat",
            "company": "GitHub",
            "public_repos": 2,
            "followers": 20,
            "created_at": "2008-01-14T04:33:35Z",
            "two_factor_authentication": true,
            "plan": {"name": "Medium", "space": 400, "private_repos": 20, "collaborators": 0}
        }"#;

        let user: User = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(user.login, "octocat");
        assert_eq!(user.user_type.as_deref(), Some("User"));
        assert_eq!(user.public_repos, Some(2));
        assert_eq!(user.two_factor_authentication_enabled, Some(true));
        assert_eq!(user.plan.and_then(|p| p.private_repos), Some(20));
        assert_eq!(
            user.created_at.map(|d| d.timestamp()),
            Some(1_200_285_215)
        );
    }

    #[test]
    fn test_minimal_user() {
        let user: User = serde_json::from_str(r#"{"id": 42}"#).expect("Should deserialize");
        assert_eq!(user.id, 42);
        assert!(user.login.is_empty());
        assert!(user.plan.is_none());
    }

    #[test]
    fn test_users_equal_by_id() {
        let a: User = serde_json::from_str(r#"{"id": 7, "login": "a"}"#).unwrap();
        let b: User = serde_json::from_str(r#"{"id": 7, "login": "renamed"}"#).unwrap();
        let c: User = serde_json::from_str(r#"{"id": 8, "login": "a"}"#).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
