//! Gist data models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::users::User;

/// A gist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gist {
    /// Gists use string ids
    pub id: String,
    pub node_id: Option<String>,
    pub url: Option<String>,
    pub forks_url: Option<String>,
    pub commits_url: Option<String>,
    pub git_pull_url: Option<String>,
    pub git_push_url: Option<String>,
    pub html_url: Option<String>,
    pub comments_url: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "public")]
    pub is_public: Option<bool>,
    /// Files keyed by filename
    #[serde(default)]
    pub files: BTreeMap<String, GistFile>,
    pub comments: Option<u32>,
    pub owner: Option<User>,
    pub truncated: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A file inside a gist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistFile {
    pub filename: Option<String>,
    /// MIME type
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    pub language: Option<String>,
    pub raw_url: Option<String>,
    pub size: Option<u64>,
    pub truncated: Option<bool>,
    /// Only present when fetching a single gist
    pub content: Option<String>,
}

/// File contents sent when creating or updating a gist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GistFileContent {
    pub content: String,
}

/// Body of a create-gist request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateGist {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub public: bool,
    pub files: BTreeMap<String, GistFileContent>,
}

impl CreateGist {
    #[must_use]
    pub fn new(public: bool) -> Self {
        Self {
            public,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn file(mut self, filename: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(
            filename.into(),
            GistFileContent {
                content: content.into(),
            },
        );
        self
    }
}

/// Body of an update-gist request.
///
/// A file mapped to `None` is sent as `null`, which deletes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateGist {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub files: BTreeMap<String, Option<GistFileContent>>,
}

impl UpdateGist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn file(mut self, filename: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(
            filename.into(),
            Some(GistFileContent {
                content: content.into(),
            }),
        );
        self
    }

    #[must_use]
    pub fn remove_file(mut self, filename: impl Into<String>) -> Self {
        self.files.insert(filename.into(), None);
        self
    }
}
