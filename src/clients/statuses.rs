//! Commit statuses.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::error::Error;
use crate::router::{encode_reference, encode_segment, repo_path, Router};
use crate::transport::HttpTransport;
use crate::types::{CreateStatus, Status};

/// Status endpoints.
#[derive(Debug, Clone, Copy)]
pub enum StatusRouter<'a> {
    Create(&'a str, &'a str, &'a str, &'a CreateStatus),
    /// Statuses for a SHA, branch or tag
    ListForRef(&'a str, &'a str, &'a str),
}

impl Router for StatusRouter<'_> {
    fn method(&self) -> Method {
        match self {
            Self::Create(..) => Method::POST,
            Self::ListForRef(..) => Method::GET,
        }
    }

    fn path(&self) -> String {
        match self {
            Self::Create(owner, repo, sha, _) => {
                format!("{}/statuses/{}", repo_path(owner, repo), encode_segment(sha))
            }
            Self::ListForRef(owner, repo, reference) => format!(
                "{}/commits/{}/statuses",
                repo_path(owner, repo),
                encode_reference(reference)
            ),
        }
    }

    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        match self {
            Self::Create(.., status) => serde_json::to_value(status).map(Some),
            Self::ListForRef(..) => Ok(None),
        }
    }
}

/// Client for commit statuses.
pub struct StatusesClient {
    transport: Arc<HttpTransport>,
}

impl StatusesClient {
    /// Create a new statuses client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Report a status on a commit.
    ///
    /// # Arguments
    ///
    /// * `sha` - Full commit SHA
    /// * `status` - State plus optional context, description and link
    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
        status: &CreateStatus,
    ) -> Result<Status, Error> {
        self.transport
            .load(&StatusRouter::Create(owner, repo, sha, status))
            .await
    }

    /// Statuses for a ref, newest first.
    pub async fn list_for_ref(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
    ) -> Result<Vec<Status>, Error> {
        self.transport
            .load(&StatusRouter::ListForRef(owner, repo, reference))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatusState;

    #[test]
    fn test_routes() {
        let status = CreateStatus::new(StatusState::Success);
        let route = StatusRouter::Create("o", "r", "6dcb09b5", &status);
        assert_eq!(route.path(), "repos/o/r/statuses/6dcb09b5");
        assert_eq!(route.method(), Method::POST);
        assert_eq!(route.body().unwrap(), Some(serde_json::json!({"state": "success"})));

        assert_eq!(
            StatusRouter::ListForRef("o", "r", "feature/x").path(),
            "repos/o/r/commits/feature/x/statuses"
        );
    }
}
