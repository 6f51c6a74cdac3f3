//! Pull request data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::issues::Openness;
use super::labels::Label;
use super::milestones::Milestone;
use super::repos::Repository;
use super::users::User;

/// A pull request.
///
/// Two pull requests are equal when their ids are.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub id: u64,
    pub node_id: Option<String>,
    pub url: Option<String>,
    pub html_url: Option<String>,
    pub diff_url: Option<String>,
    pub patch_url: Option<String>,
    pub issue_url: Option<String>,
    pub commits_url: Option<String>,
    pub review_comments_url: Option<String>,
    pub comments_url: Option<String>,
    pub statuses_url: Option<String>,
    /// Per-repository number, shared with issues
    pub number: u64,
    pub state: Option<Openness>,
    pub locked: Option<bool>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub user: Option<User>,
    #[serde(default)]
    pub labels: Vec<Label>,
    pub milestone: Option<Milestone>,
    pub assignee: Option<User>,
    #[serde(default)]
    pub assignees: Vec<User>,
    #[serde(default)]
    pub requested_reviewers: Vec<User>,
    pub draft: Option<bool>,
    pub merged: Option<bool>,
    pub mergeable: Option<bool>,
    /// `clean`, `dirty`, `blocked`...
    pub mergeable_state: Option<String>,
    pub merged_by: Option<User>,
    pub merge_commit_sha: Option<String>,
    pub head: Option<PullRequestRef>,
    pub base: Option<PullRequestRef>,
    pub comments: Option<u32>,
    pub review_comments: Option<u32>,
    pub commits: Option<u32>,
    pub additions: Option<u32>,
    pub deletions: Option<u32>,
    pub changed_files: Option<u32>,
    pub author_association: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub merged_at: Option<DateTime<Utc>>,
}

impl PartialEq for PullRequest {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PullRequest {}

/// The head or base side of a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    /// `owner:branch`
    pub label: Option<String>,
    /// Branch name
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    pub sha: Option<String>,
    pub user: Option<User>,
    pub repo: Option<Repository>,
}

/// How a file changed in a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Added,
    Removed,
    Modified,
    Renamed,
    Copied,
    Changed,
    Unchanged,
    #[serde(other)]
    Unknown,
}

/// A file touched by a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestFile {
    pub sha: Option<String>,
    pub filename: String,
    pub status: FileStatus,
    #[serde(default)]
    pub additions: u32,
    #[serde(default)]
    pub deletions: u32,
    #[serde(default)]
    pub changes: u32,
    pub blob_url: Option<String>,
    pub raw_url: Option<String>,
    pub contents_url: Option<String>,
    /// Unified diff hunk; absent for binary or very large files
    pub patch: Option<String>,
    /// Set when `status` is `renamed`
    pub previous_filename: Option<String>,
}

/// Sort key for pull request listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PullRequestSort {
    Created,
    Updated,
    Popularity,
    LongRunning,
}

impl PullRequestSort {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Popularity => "popularity",
            Self::LongRunning => "long-running",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Filters for listing pull requests. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestFilter {
    /// Base branch name
    pub base: Option<String>,
    /// `user:branch`
    pub head: Option<String>,
    pub state: Option<Openness>,
    pub sort: Option<PullRequestSort>,
    pub direction: Option<SortDirection>,
}

impl PullRequestFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(mut self, state: Openness) -> Self {
        self.state = Some(state);
        self
    }

    #[must_use]
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    #[must_use]
    pub fn head(mut self, head: impl Into<String>) -> Self {
        self.head = Some(head.into());
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: PullRequestSort, direction: SortDirection) -> Self {
        self.sort = Some(sort);
        self.direction = Some(direction);
        self
    }

    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(base) = &self.base {
            params.push(("base", base.clone()));
        }
        if let Some(head) = &self.head {
            params.push(("head", head.clone()));
        }
        if let Some(state) = self.state {
            params.push(("state", state.as_str().to_string()));
        }
        if let Some(sort) = self.sort {
            params.push(("sort", sort.as_str().to_string()));
        }
        if let Some(direction) = self.direction {
            params.push(("direction", direction.as_str().to_string()));
        }
        params
    }
}

/// Body of a create-pull-request request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreatePullRequest {
    pub title: String,
    /// Branch with the changes, `user:branch` for cross-repository requests
    pub head: String,
    /// Branch to merge into
    pub base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_repo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainer_can_modify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
}

impl CreatePullRequest {
    #[must_use]
    pub fn new(title: impl Into<String>, head: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            head: head.into(),
            base: base.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn draft(mut self, draft: bool) -> Self {
        self.draft = Some(draft);
        self
    }
}

/// Body of an update-pull-request request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdatePullRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<Openness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainer_can_modify: Option<bool>,
}

impl UpdatePullRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn state(mut self, state: Openness) -> Self {
        self.state = Some(state);
        self
    }

    #[must_use]
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pull_request_deserialize() {
        let json = r#"{
            "id": 1,
            "number": 1347,
            "state": "open",
            "title": "Amazing new feature",
            "user": {"login": "octocat", "id": 1},
            "draft": false,
            "head": {
                "label": "octocat:new-topic",
                "ref": "new-topic",
                "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
                "repo": {"id": 1296269, "name": "Hello-World"}
            },
            "base": {"label": "octocat:master", "ref": "master", "sha": "6dcb09b5"},
            "merged_at": null,
            "created_at": "2011-01-26T19:01:12Z"
        }"#;

        let pr: PullRequest = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(pr.number, 1347);
        assert_eq!(pr.draft, Some(false));
        let head = pr.head.expect("head");
        assert_eq!(head.reference.as_deref(), Some("new-topic"));
        assert_eq!(head.repo.map(|r| r.name), Some("Hello-World".to_string()));
        assert_eq!(pr.base.and_then(|b| b.reference).as_deref(), Some("master"));
        assert!(pr.merged_at.is_none());
    }

    #[test]
    fn test_file_status() {
        let json = r#"[
            {"filename": "a.rs", "status": "added", "additions": 10, "changes": 10},
            {"filename": "b.rs", "status": "renamed", "previous_filename": "old_b.rs"},
            {"filename": "c.rs", "status": "something-new"}
        ]"#;

        let files: Vec<PullRequestFile> = serde_json::from_str(json).unwrap();
        assert_eq!(files[0].status, FileStatus::Added);
        assert_eq!(files[0].additions, 10);
        assert_eq!(files[1].status, FileStatus::Renamed);
        assert_eq!(files[1].previous_filename.as_deref(), Some("old_b.rs"));
        assert_eq!(files[2].status, FileStatus::Unknown);
    }

    #[test]
    fn test_filter_params_skip_unset() {
        assert!(PullRequestFilter::new().params().is_empty());

        let filter = PullRequestFilter::new()
            .base("main")
            .state(Openness::Closed)
            .sort(PullRequestSort::LongRunning, SortDirection::Asc);
        assert_eq!(
            filter.params(),
            vec![
                ("base", "main".to_string()),
                ("state", "closed".to_string()),
                ("sort", "long-running".to_string()),
                ("direction", "asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_create_pull_request_body() {
        let body = serde_json::to_value(
            CreatePullRequest::new("Feature", "octocat:feature", "main").draft(true),
        )
        .unwrap();
        assert_eq!(
            body,
            json!({"title": "Feature", "head": "octocat:feature", "base": "main", "draft": true})
        );
    }
}
