//! Pull request review data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::users::User;

/// State of a submitted or pending review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    Approved,
    ChangesRequested,
    Commented,
    Dismissed,
    Pending,
    /// A state this client does not know yet
    #[serde(other)]
    Unknown,
}

/// Action taken when submitting a review. Leave it unset to create a
/// pending review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewEvent {
    Approve,
    RequestChanges,
    Comment,
}

/// A pull request review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    pub node_id: Option<String>,
    pub user: Option<User>,
    pub body: Option<String>,
    pub state: ReviewState,
    pub html_url: Option<String>,
    pub pull_request_url: Option<String>,
    /// Commit the review was made against
    pub commit_id: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub author_association: Option<String>,
}

/// An inline comment attached to a new review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftReviewComment {
    pub path: String,
    pub body: String,
    /// Line index in the diff hunk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// Line number in the file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// `LEFT` or `RIGHT`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
}

impl DraftReviewComment {
    #[must_use]
    pub fn on_line(path: impl Into<String>, line: u32, body: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: body.into(),
            line: Some(line),
            ..Self::default()
        }
    }
}

/// Body of a create-review request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateReview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<ReviewEvent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<DraftReviewComment>,
}

impl CreateReview {
    /// A review submitted with the given event.
    #[must_use]
    pub fn new(event: ReviewEvent) -> Self {
        Self {
            event: Some(event),
            ..Self::default()
        }
    }

    /// A pending review, to be submitted later.
    #[must_use]
    pub fn pending() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn commit(mut self, sha: impl Into<String>) -> Self {
        self.commit_id = Some(sha.into());
        self
    }

    #[must_use]
    pub fn comment(mut self, comment: DraftReviewComment) -> Self {
        self.comments.push(comment);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_review_deserialize() {
        let json = r#"[
            {"id": 80, "user": {"login": "octocat", "id": 1}, "body": "Here is the body.",
             "state": "APPROVED", "commit_id": "ecdd80bb", "submitted_at": "2019-11-17T17:43:43Z"},
            {"id": 81, "state": "CHANGES_REQUESTED"},
            {"id": 82, "state": "PENDING"}
        ]"#;

        let reviews: Vec<Review> = serde_json::from_str(json).unwrap();
        assert_eq!(reviews[0].state, ReviewState::Approved);
        assert!(reviews[0].submitted_at.is_some());
        assert_eq!(reviews[1].state, ReviewState::ChangesRequested);
        assert_eq!(reviews[2].state, ReviewState::Pending);
    }

    #[test]
    fn test_unrecognised_review_state() {
        let json = r#"[{"id": 83, "state": "AWAITING_SIGNOFF"}, {"id": 84, "state": "DISMISSED"}]"#;

        let reviews: Vec<Review> = serde_json::from_str(json).unwrap();
        assert_eq!(reviews[0].state, ReviewState::Unknown);
        assert_eq!(reviews[1].state, ReviewState::Dismissed);
    }

    #[test]
    fn test_create_review_body() {
        let review = CreateReview::new(ReviewEvent::RequestChanges)
            .body("Please fix")
            .comment(DraftReviewComment::on_line("src/lib.rs", 12, "typo"));

        assert_eq!(
            serde_json::to_value(review).unwrap(),
            json!({
                "body": "Please fix",
                "event": "REQUEST_CHANGES",
                "comments": [{"path": "src/lib.rs", "body": "typo", "line": 12}]
            })
        );
    }

    #[test]
    fn test_pending_review_has_no_event() {
        assert_eq!(serde_json::to_value(CreateReview::pending()).unwrap(), json!({}));
    }
}
