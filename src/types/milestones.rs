//! Milestone data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::issues::Openness;
use super::users::User;

/// A milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: u64,
    pub node_id: Option<String>,
    pub url: Option<String>,
    pub html_url: Option<String>,
    pub labels_url: Option<String>,
    /// Per-repository number
    pub number: u64,
    pub state: Option<Openness>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub creator: Option<User>,
    pub open_issues: Option<u32>,
    pub closed_issues: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub due_on: Option<DateTime<Utc>>,
}

/// Body of a create-milestone request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateMilestone {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<Openness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::time::option_rfc3339::serialize"
    )]
    pub due_on: Option<DateTime<Utc>>,
}

impl CreateMilestone {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn due_on(mut self, due_on: DateTime<Utc>) -> Self {
        self.due_on = Some(due_on);
        self
    }
}
