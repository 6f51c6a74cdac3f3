//! Pull requests resource client.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::error::Error;
use crate::router::{repo_path, Page, Router};
use crate::transport::HttpTransport;
use crate::types::{
    CreatePullRequest, PullRequest, PullRequestFile, PullRequestFilter, UpdatePullRequest,
};

/// Pull request endpoints.
#[derive(Debug, Clone, Copy)]
pub enum PullRequestRouter<'a> {
    Get(&'a str, &'a str, u64),
    List(&'a str, &'a str, &'a PullRequestFilter, Page),
    Files(&'a str, &'a str, u64, Page),
    Create(&'a str, &'a str, &'a CreatePullRequest),
    Update(&'a str, &'a str, u64, &'a UpdatePullRequest),
}

impl Router for PullRequestRouter<'_> {
    fn method(&self) -> Method {
        match self {
            Self::Get(..) | Self::List(..) | Self::Files(..) => Method::GET,
            Self::Create(..) => Method::POST,
            Self::Update(..) => Method::PATCH,
        }
    }

    fn path(&self) -> String {
        match self {
            Self::Get(owner, repo, number) | Self::Update(owner, repo, number, _) => {
                format!("{}/pulls/{number}", repo_path(owner, repo))
            }
            Self::List(owner, repo, ..) | Self::Create(owner, repo, _) => {
                format!("{}/pulls", repo_path(owner, repo))
            }
            Self::Files(owner, repo, number, _) => {
                format!("{}/pulls/{number}/files", repo_path(owner, repo))
            }
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::List(_, _, filter, page) => {
                let mut params = filter.params();
                page.extend(&mut params);
                params
            }
            Self::Files(.., page) => page.params(),
            _ => Vec::new(),
        }
    }

    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        match self {
            Self::Create(.., pull) => serde_json::to_value(pull).map(Some),
            Self::Update(.., update) => serde_json::to_value(update).map(Some),
            _ => Ok(None),
        }
    }
}

/// Client for pull requests.
pub struct PullsClient {
    transport: Arc<HttpTransport>,
}

impl PullsClient {
    /// Create a new pulls client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Get a pull request by number.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if there is no pull request with that
    /// number. Plain issues share the number space but are not found here.
    pub async fn get(&self, owner: &str, repo: &str, number: u64) -> Result<PullRequest, Error> {
        self.transport.load(&PullRequestRouter::Get(owner, repo, number)).await
    }

    /// List pull requests matching `filter`. Unset filter fields are not
    /// sent, so GitHub's defaults (open, newest first) apply.
    pub async fn list(
        &self,
        owner: &str,
        repo: &str,
        filter: &PullRequestFilter,
        page: Page,
    ) -> Result<Vec<PullRequest>, Error> {
        self.transport
            .load(&PullRequestRouter::List(owner, repo, filter, page))
            .await
    }

    /// Files changed by a pull request.
    pub async fn files(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        page: Page,
    ) -> Result<Vec<PullRequestFile>, Error> {
        self.transport
            .load(&PullRequestRouter::Files(owner, repo, number, page))
            .await
    }

    /// Open a pull request.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the branches do not exist or a pull
    /// request between them is already open.
    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        pull: &CreatePullRequest,
    ) -> Result<PullRequest, Error> {
        self.transport
            .load(&PullRequestRouter::Create(owner, repo, pull))
            .await
    }

    /// Edit a pull request; closing is `state: Closed`.
    pub async fn update(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        update: &UpdatePullRequest,
    ) -> Result<PullRequest, Error> {
        self.transport
            .load(&PullRequestRouter::Update(owner, repo, number, update))
            .await
    }
}
