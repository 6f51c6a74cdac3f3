//! Releases resource client.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::error::Error;
use crate::router::{encode_segment, repo_path, Page, Router};
use crate::transport::HttpTransport;
use crate::types::{CreateRelease, Release};

/// Release endpoints.
#[derive(Debug, Clone, Copy)]
pub enum ReleaseRouter<'a> {
    List(&'a str, &'a str, Page),
    GetByTag(&'a str, &'a str, &'a str),
    Latest(&'a str, &'a str),
    Create(&'a str, &'a str, &'a CreateRelease),
    Delete(&'a str, &'a str, u64),
}

impl Router for ReleaseRouter<'_> {
    fn method(&self) -> Method {
        match self {
            Self::List(..) | Self::GetByTag(..) | Self::Latest(..) => Method::GET,
            Self::Create(..) => Method::POST,
            Self::Delete(..) => Method::DELETE,
        }
    }

    fn path(&self) -> String {
        match self {
            Self::List(owner, repo, _) | Self::Create(owner, repo, _) => {
                format!("{}/releases", repo_path(owner, repo))
            }
            Self::GetByTag(owner, repo, tag) => {
                format!("{}/releases/tags/{}", repo_path(owner, repo), encode_segment(tag))
            }
            Self::Latest(owner, repo) => format!("{}/releases/latest", repo_path(owner, repo)),
            Self::Delete(owner, repo, id) => format!("{}/releases/{id}", repo_path(owner, repo)),
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::List(.., page) => page.params(),
            _ => Vec::new(),
        }
    }

    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        match self {
            Self::Create(.., release) => serde_json::to_value(release).map(Some),
            _ => Ok(None),
        }
    }
}

/// Client for releases.
pub struct ReleasesClient {
    transport: Arc<HttpTransport>,
}

impl ReleasesClient {
    /// Create a new releases client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List releases, newest first. Drafts are only visible to users with
    /// push access.
    pub async fn list(&self, owner: &str, repo: &str, page: Page) -> Result<Vec<Release>, Error> {
        self.transport.load(&ReleaseRouter::List(owner, repo, page)).await
    }

    pub async fn get_by_tag(&self, owner: &str, repo: &str, tag: &str) -> Result<Release, Error> {
        self.transport.load(&ReleaseRouter::GetByTag(owner, repo, tag)).await
    }

    /// The latest published, non-prerelease release.
    pub async fn latest(&self, owner: &str, repo: &str) -> Result<Release, Error> {
        self.transport.load(&ReleaseRouter::Latest(owner, repo)).await
    }

    /// Create a release.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a release for the tag already exists.
    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        release: &CreateRelease,
    ) -> Result<Release, Error> {
        self.transport
            .load(&ReleaseRouter::Create(owner, repo, release))
            .await
    }

    /// Delete a release. The git tag is left in place.
    pub async fn delete(&self, owner: &str, repo: &str, id: u64) -> Result<(), Error> {
        self.transport
            .load_empty(&ReleaseRouter::Delete(owner, repo, id))
            .await
    }
}
