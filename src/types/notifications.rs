//! Notification data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::repos::Repository;
use crate::time::format_rfc3339;

/// A notification thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationThread {
    /// Threads use string ids
    pub id: String,
    #[serde(default)]
    pub unread: bool,
    /// Why the user was notified (`mention`, `review_requested`...)
    pub reason: Option<String>,
    pub subject: NotificationSubject,
    pub repository: Option<Repository>,
    pub url: Option<String>,
    pub subscription_url: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_read_at: Option<DateTime<Utc>>,
}

/// What a notification thread is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSubject {
    pub title: Option<String>,
    pub url: Option<String>,
    pub latest_comment_url: Option<String>,
    /// `Issue`, `PullRequest`, `Release`...
    #[serde(rename = "type")]
    pub subject_type: Option<String>,
}

/// The caller's subscription to a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadSubscription {
    #[serde(default)]
    pub subscribed: bool,
    #[serde(default)]
    pub ignored: bool,
    pub reason: Option<String>,
    pub url: Option<String>,
    pub thread_url: Option<String>,
    pub repository_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Filters for listing notifications.
///
/// `all` and `participating` are always sent; the dates only when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationFilter {
    /// Include threads already marked read
    pub all: bool,
    /// Only threads the user is directly participating in
    pub participating: bool,
    /// Only threads updated after this time
    pub since: Option<DateTime<Utc>>,
    /// Only threads updated before this time
    pub before: Option<DateTime<Utc>>,
}

impl NotificationFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn all(mut self, all: bool) -> Self {
        self.all = all;
        self
    }

    #[must_use]
    pub fn participating(mut self, participating: bool) -> Self {
        self.participating = participating;
        self
    }

    #[must_use]
    pub fn since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    #[must_use]
    pub fn before(mut self, before: DateTime<Utc>) -> Self {
        self.before = Some(before);
        self
    }

    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("all", self.all.to_string()),
            ("participating", self.participating.to_string()),
        ];
        if let Some(since) = &self.since {
            params.push(("since", format_rfc3339(since)));
        }
        if let Some(before) = &self.before {
            params.push(("before", format_rfc3339(before)));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_thread_deserialize() {
        let json = r#"{
            "id": "1",
            "repository": {"id": 1296269, "name": "Hello-World", "full_name": "octocat/Hello-World"},
            "subject": {
                "title": "Greetings",
                "url": "https://api.github.com/repos/octokit/octokit.rb/issues/123",
                "type": "Issue"
            },
            "reason": "subscribed",
            "unread": true,
            "updated_at": "2014-11-07T22:01:45Z",
            "last_read_at": null
        }"#;

        let thread: NotificationThread = serde_json::from_str(json).unwrap();
        assert_eq!(thread.id, "1");
        assert!(thread.unread);
        assert_eq!(thread.subject.subject_type.as_deref(), Some("Issue"));
        assert!(thread.last_read_at.is_none());
    }

    #[test]
    fn test_subscription_deserialize() {
        let json = r#"{"subscribed": true, "ignored": false, "reason": null,
                       "created_at": "2012-10-06T21:34:12Z"}"#;
        let sub: ThreadSubscription = serde_json::from_str(json).unwrap();
        assert!(sub.subscribed);
        assert!(!sub.ignored);
    }

    #[test]
    fn test_filter_params() {
        assert_eq!(
            NotificationFilter::new().params(),
            vec![("all", "false".to_string()), ("participating", "false".to_string())]
        );

        let since = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let params = NotificationFilter::new().all(true).since(since).params();
        assert_eq!(params[0], ("all", "true".to_string()));
        assert_eq!(params[2], ("since", "2024-01-02T03:04:05Z".to_string()));
        assert_eq!(params.len(), 3);
    }
}
