//! Git database endpoints.

use std::sync::Arc;

use reqwest::Method;

use crate::error::Error;
use crate::router::{encode_reference, repo_path, Router};
use crate::transport::HttpTransport;

#[derive(Debug, Clone, Copy)]
pub enum GitRouter<'a> {
    /// Reference without the `refs/` prefix, e.g. `heads/feature`
    DeleteReference(&'a str, &'a str, &'a str),
}

impl Router for GitRouter<'_> {
    fn method(&self) -> Method {
        match self {
            Self::DeleteReference(..) => Method::DELETE,
        }
    }

    fn path(&self) -> String {
        match self {
            Self::DeleteReference(owner, repo, reference) => format!(
                "{}/git/refs/{}",
                repo_path(owner, repo),
                encode_reference(reference)
            ),
        }
    }
}

/// Client for low-level git operations.
pub struct GitClient {
    transport: Arc<HttpTransport>,
}

impl GitClient {
    /// Create a new git client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Delete a branch or tag reference.
    ///
    /// # Arguments
    ///
    /// * `reference` - `heads/<branch>` or `tags/<tag>`; slashes inside
    ///   branch names are kept
    ///
    /// # Errors
    ///
    /// Returns a validation error (422) if the reference does not exist.
    pub async fn delete_reference(&self, owner: &str, repo: &str, reference: &str) -> Result<(), Error> {
        self.transport
            .load_empty(&GitRouter::DeleteReference(owner, repo, reference))
            .await
    }
}
