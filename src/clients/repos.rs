//! Repositories resource client.

use std::sync::Arc;

use reqwest::Method;

use crate::error::Error;
use crate::router::{encode_segment, repo_path, Page, Router};
use crate::transport::HttpTransport;
use crate::types::Repository;

/// Repository endpoints.
#[derive(Debug, Clone, Copy)]
pub enum RepositoryRouter<'a> {
    /// Repositories of a user, or of the authenticated user when `None`
    List(Option<&'a str>, Page),
    ListForOrg(&'a str, Page),
    Get(&'a str, &'a str),
}

impl Router for RepositoryRouter<'_> {
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        match self {
            Self::List(None, _) => "user/repos".to_string(),
            Self::List(Some(owner), _) => format!("users/{}/repos", encode_segment(owner)),
            Self::ListForOrg(org, _) => format!("orgs/{}/repos", encode_segment(org)),
            Self::Get(owner, name) => repo_path(owner, name),
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::List(_, page) | Self::ListForOrg(_, page) => page.params(),
            Self::Get(..) => Vec::new(),
        }
    }
}

/// Client for repository lookups.
pub struct ReposClient {
    transport: Arc<HttpTransport>,
}

impl ReposClient {
    /// Create a new repos client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List repositories.
    ///
    /// # Arguments
    ///
    /// * `owner` - User whose repositories to list; `None` lists the
    ///   authenticated user's repositories, private ones included
    /// * `page` - Pagination
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, owner: Option<&str>, page: Page) -> Result<Vec<Repository>, Error> {
        self.transport.load(&RepositoryRouter::List(owner, page)).await
    }

    /// List an organization's repositories.
    pub async fn list_for_org(&self, org: &str, page: Page) -> Result<Vec<Repository>, Error> {
        self.transport.load(&RepositoryRouter::ListForOrg(org, page)).await
    }

    /// Get a single repository.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the repository does not exist or is
    /// not visible to the caller.
    pub async fn get(&self, owner: &str, name: &str) -> Result<Repository, Error> {
        self.transport.load(&RepositoryRouter::Get(owner, name)).await
    }
}
