//! Notifications resource client.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde_json::{json, Map, Value};

use crate::error::Error;
use crate::router::{encode_segment, repo_path, Page, Router};
use crate::time::format_rfc3339;
use crate::transport::HttpTransport;
use crate::types::{NotificationFilter, NotificationThread, ThreadSubscription};

/// Notification endpoints.
#[derive(Debug, Clone, Copy)]
pub enum NotificationRouter<'a> {
    List(&'a NotificationFilter, Page),
    MarkRead(Option<DateTime<Utc>>),
    Thread(&'a str),
    MarkThreadRead(&'a str),
    ThreadSubscription(&'a str),
    SetThreadSubscription(&'a str, bool),
    DeleteThreadSubscription(&'a str),
    ListForRepo(&'a str, &'a str, &'a NotificationFilter, Page),
    MarkRepoRead(&'a str, &'a str, Option<DateTime<Utc>>),
}

impl Router for NotificationRouter<'_> {
    fn method(&self) -> Method {
        match self {
            Self::List(..) | Self::Thread(_) | Self::ThreadSubscription(_) | Self::ListForRepo(..) => {
                Method::GET
            }
            Self::MarkRead(_) | Self::SetThreadSubscription(..) | Self::MarkRepoRead(..) => {
                Method::PUT
            }
            Self::MarkThreadRead(_) => Method::PATCH,
            Self::DeleteThreadSubscription(_) => Method::DELETE,
        }
    }

    fn path(&self) -> String {
        match self {
            Self::List(..) | Self::MarkRead(_) => "notifications".to_string(),
            Self::Thread(id) | Self::MarkThreadRead(id) => {
                format!("notifications/threads/{}", encode_segment(id))
            }
            Self::ThreadSubscription(id)
            | Self::SetThreadSubscription(id, _)
            | Self::DeleteThreadSubscription(id) => {
                format!("notifications/threads/{}/subscription", encode_segment(id))
            }
            Self::ListForRepo(owner, repo, ..) | Self::MarkRepoRead(owner, repo, _) => {
                format!("{}/notifications", repo_path(owner, repo))
            }
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::List(filter, page) | Self::ListForRepo(_, _, filter, page) => {
                let mut params = filter.params();
                page.extend(&mut params);
                params
            }
            _ => Vec::new(),
        }
    }

    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        match self {
            Self::MarkRead(last_read_at) | Self::MarkRepoRead(_, _, last_read_at) => {
                let mut body = Map::new();
                body.insert("read".to_string(), Value::Bool(true));
                if let Some(at) = last_read_at {
                    body.insert("last_read_at".to_string(), Value::String(format_rfc3339(at)));
                }
                Ok(Some(Value::Object(body)))
            }
            Self::SetThreadSubscription(_, ignored) => Ok(Some(json!({ "ignored": ignored }))),
            _ => Ok(None),
        }
    }
}

/// Client for notifications and thread subscriptions.
pub struct NotificationsClient {
    transport: Arc<HttpTransport>,
}

impl NotificationsClient {
    /// Create a new notifications client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List the authenticated user's notification threads.
    pub async fn list(
        &self,
        filter: &NotificationFilter,
        page: Page,
    ) -> Result<Vec<NotificationThread>, Error> {
        self.transport.load(&NotificationRouter::List(filter, page)).await
    }

    /// Mark every notification as read.
    ///
    /// # Arguments
    ///
    /// * `last_read_at` - Only threads updated before this are marked;
    ///   `None` lets GitHub use the current time
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. GitHub answers 202 when it
    /// processes the request in the background, which counts as success.
    pub async fn mark_read(&self, last_read_at: Option<DateTime<Utc>>) -> Result<(), Error> {
        self.transport
            .load_empty(&NotificationRouter::MarkRead(last_read_at))
            .await
    }

    pub async fn thread(&self, id: &str) -> Result<NotificationThread, Error> {
        self.transport.load(&NotificationRouter::Thread(id)).await
    }

    pub async fn mark_thread_read(&self, id: &str) -> Result<(), Error> {
        self.transport
            .load_empty(&NotificationRouter::MarkThreadRead(id))
            .await
    }

    pub async fn thread_subscription(&self, id: &str) -> Result<ThreadSubscription, Error> {
        self.transport
            .load(&NotificationRouter::ThreadSubscription(id))
            .await
    }

    /// Subscribe to a thread, or mute it with `ignored = true`.
    pub async fn set_thread_subscription(
        &self,
        id: &str,
        ignored: bool,
    ) -> Result<ThreadSubscription, Error> {
        self.transport
            .load(&NotificationRouter::SetThreadSubscription(id, ignored))
            .await
    }

    pub async fn delete_thread_subscription(&self, id: &str) -> Result<(), Error> {
        self.transport
            .load_empty(&NotificationRouter::DeleteThreadSubscription(id))
            .await
    }

    /// Notification threads for a single repository.
    pub async fn list_for_repo(
        &self,
        owner: &str,
        repo: &str,
        filter: &NotificationFilter,
        page: Page,
    ) -> Result<Vec<NotificationThread>, Error> {
        self.transport
            .load(&NotificationRouter::ListForRepo(owner, repo, filter, page))
            .await
    }

    /// Mark a repository's notifications as read.
    pub async fn mark_repo_read(
        &self,
        owner: &str,
        repo: &str,
        last_read_at: Option<DateTime<Utc>>,
    ) -> Result<(), Error> {
        self.transport
            .load_empty(&NotificationRouter::MarkRepoRead(owner, repo, last_read_at))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_list_params() {
        let filter = NotificationFilter::new().participating(true);
        let route = NotificationRouter::List(&filter, Page::new(1, 50));
        assert_eq!(route.path(), "notifications");
        assert_eq!(
            route.params(),
            vec![
                ("all", "false".to_string()),
                ("participating", "true".to_string()),
                ("page", "1".to_string()),
                ("per_page", "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_thread_routes() {
        assert_eq!(NotificationRouter::Thread("1").path(), "notifications/threads/1");
        assert_eq!(NotificationRouter::MarkThreadRead("1").method(), Method::PATCH);
        assert_eq!(
            NotificationRouter::ThreadSubscription("1").path(),
            "notifications/threads/1/subscription"
        );
        assert_eq!(
            NotificationRouter::DeleteThreadSubscription("1").method(),
            Method::DELETE
        );

        let route = NotificationRouter::SetThreadSubscription("1", true);
        assert_eq!(route.method(), Method::PUT);
        assert_eq!(route.body().unwrap(), Some(json!({"ignored": true})));
    }

    #[test]
    fn test_mark_read_body() {
        let at = Utc.with_ymd_and_hms(2014, 11, 7, 22, 1, 45).unwrap();
        let route = NotificationRouter::MarkRepoRead("o", "r", Some(at));
        assert_eq!(route.path(), "repos/o/r/notifications");
        assert_eq!(route.method(), Method::PUT);
        assert_eq!(
            route.body().unwrap(),
            Some(json!({"read": true, "last_read_at": "2014-11-07T22:01:45Z"}))
        );

        assert_eq!(
            NotificationRouter::MarkRead(None).body().unwrap(),
            Some(json!({"read": true}))
        );
    }
}
