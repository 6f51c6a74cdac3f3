//! Stars resource client.

use std::sync::Arc;

use reqwest::Method;

use crate::error::Error;
use crate::router::{encode_segment, Page, Router};
use crate::transport::HttpTransport;
use crate::types::Repository;

/// Starring endpoints.
#[derive(Debug, Clone, Copy)]
pub enum StarRouter<'a> {
    /// Repositories starred by a user, or the authenticated user when `None`
    Starred(Option<&'a str>, Page),
    Check(&'a str, &'a str),
    Star(&'a str, &'a str),
    Unstar(&'a str, &'a str),
}

impl Router for StarRouter<'_> {
    fn method(&self) -> Method {
        match self {
            Self::Starred(..) | Self::Check(..) => Method::GET,
            Self::Star(..) => Method::PUT,
            Self::Unstar(..) => Method::DELETE,
        }
    }

    fn path(&self) -> String {
        match self {
            Self::Starred(None, _) => "user/starred".to_string(),
            Self::Starred(Some(name), _) => format!("users/{}/starred", encode_segment(name)),
            Self::Check(owner, repo) | Self::Star(owner, repo) | Self::Unstar(owner, repo) => {
                format!("user/starred/{}/{}", encode_segment(owner), encode_segment(repo))
            }
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Starred(_, page) => page.params(),
            _ => Vec::new(),
        }
    }
}

/// Client for starring repositories.
pub struct StarsClient {
    transport: Arc<HttpTransport>,
}

impl StarsClient {
    /// Create a new stars client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Repositories starred by `name`, or the authenticated user when `None`.
    pub async fn starred(&self, name: Option<&str>, page: Page) -> Result<Vec<Repository>, Error> {
        self.transport.load(&StarRouter::Starred(name, page)).await
    }

    /// Whether the authenticated user has starred a repository.
    ///
    /// GitHub answers 204 when starred and 404 when not; the 404 is
    /// reported as `Ok(false)` rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error for any failure other than 404.
    pub async fn is_starred(&self, owner: &str, repo: &str) -> Result<bool, Error> {
        match self.transport.load_empty(&StarRouter::Check(owner, repo)).await {
            Ok(()) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Star a repository.
    pub async fn star(&self, owner: &str, repo: &str) -> Result<(), Error> {
        self.transport.load_empty(&StarRouter::Star(owner, repo)).await
    }

    /// Remove a star.
    pub async fn unstar(&self, owner: &str, repo: &str) -> Result<(), Error> {
        self.transport.load_empty(&StarRouter::Unstar(owner, repo)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenConfiguration;
    use crate::testing::{MockResponse, MockSession};

    #[test]
    fn test_routes() {
        assert_eq!(StarRouter::Starred(None, Page::default()).path(), "user/starred");
        assert_eq!(
            StarRouter::Starred(Some("octocat"), Page::default()).path(),
            "users/octocat/starred"
        );
        assert_eq!(StarRouter::Star("o", "r").path(), "user/starred/o/r");
        assert_eq!(StarRouter::Check("o", "r").method(), Method::GET);
        assert_eq!(StarRouter::Star("o", "r").method(), Method::PUT);
        assert_eq!(StarRouter::Unstar("o", "r").method(), Method::DELETE);
    }

    fn client(session: Arc<MockSession>) -> StarsClient {
        StarsClient::new(Arc::new(HttpTransport::with_session(
            TokenConfiguration::new(Some("12345")),
            session,
        )))
    }

    #[tokio::test]
    async fn test_is_starred_maps_statuses() {
        let session = Arc::new(MockSession::new());
        session.push(MockResponse::empty(204));
        session.push(MockResponse::json(404, r#"{"message": "Not Found"}"#));
        session.push(MockResponse::json(401, r#"{"message": "Bad credentials"}"#));
        let client = client(session.clone());

        assert!(client.is_starred("octocat", "Hello-World").await.unwrap());
        assert!(!client.is_starred("octocat", "Hello-World").await.unwrap());
        let err = client.is_starred("octocat", "Hello-World").await.unwrap_err();
        assert_eq!(err.status_code(), Some(401));
        assert!(session.was_called("/user/starred/octocat/Hello-World"));
    }
}
