//! Organization and team data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: u64,
    #[serde(default)]
    pub login: String,
    pub node_id: Option<String>,
    pub url: Option<String>,
    pub html_url: Option<String>,
    pub repos_url: Option<String>,
    pub members_url: Option<String>,
    pub avatar_url: Option<String>,
    pub description: Option<String>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub twitter_username: Option<String>,
    pub is_verified: Option<bool>,
    pub public_repos: Option<u32>,
    pub public_gists: Option<u32>,
    pub followers: Option<u32>,
    pub following: Option<u32>,
    #[serde(rename = "type")]
    pub org_type: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A team inside an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u64,
    pub node_id: Option<String>,
    pub url: Option<String>,
    pub html_url: Option<String>,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    /// `secret` or `closed`
    pub privacy: Option<String>,
    pub permission: Option<String>,
    pub members_url: Option<String>,
    pub repositories_url: Option<String>,
    pub parent: Option<Box<Team>>,
    /// Only set on `/user/teams`
    pub organization: Option<Organization>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_deserialize() {
        let json = r#"{
            "login": "github",
            "id": 1,
            "description": "A great organization",
            "name": "github",
            "is_verified": true,
            "public_repos": 2,
            "type": "Organization",
            "created_at": "2008-01-14T04:33:35Z"
        }"#;

        let org: Organization = serde_json::from_str(json).unwrap();
        assert_eq!(org.login, "github");
        assert_eq!(org.org_type.as_deref(), Some("Organization"));
        assert_eq!(org.is_verified, Some(true));
    }

    #[test]
    fn test_team_with_parent() {
        let json = r#"{
            "id": 2,
            "name": "Justice League",
            "slug": "justice-league",
            "privacy": "closed",
            "parent": {"id": 1, "name": "Heroes", "parent": null},
            "organization": {"login": "github", "id": 1}
        }"#;

        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.slug.as_deref(), Some("justice-league"));
        assert_eq!(team.parent.map(|p| p.name), Some("Heroes".to_string()));
        assert_eq!(team.organization.map(|o| o.login), Some("github".to_string()));
    }
}
