//! Gists resource client.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::error::Error;
use crate::router::{encode_segment, Page, Router};
use crate::transport::HttpTransport;
use crate::types::{CreateGist, Gist, UpdateGist};

/// Gist endpoints.
#[derive(Debug, Clone, Copy)]
pub enum GistRouter<'a> {
    ListMine(Page),
    List(&'a str, Page),
    Get(&'a str),
    Create(&'a CreateGist),
    Update(&'a str, &'a UpdateGist),
}

impl Router for GistRouter<'_> {
    fn method(&self) -> Method {
        match self {
            Self::ListMine(_) | Self::List(..) | Self::Get(_) => Method::GET,
            Self::Create(_) => Method::POST,
            Self::Update(..) => Method::PATCH,
        }
    }

    fn path(&self) -> String {
        match self {
            Self::ListMine(_) | Self::Create(_) => "gists".to_string(),
            Self::List(owner, _) => format!("users/{}/gists", encode_segment(owner)),
            Self::Get(id) | Self::Update(id, _) => format!("gists/{}", encode_segment(id)),
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::ListMine(page) | Self::List(_, page) => page.params(),
            _ => Vec::new(),
        }
    }

    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        match self {
            Self::Create(gist) => serde_json::to_value(gist).map(Some),
            Self::Update(_, update) => serde_json::to_value(update).map(Some),
            _ => Ok(None),
        }
    }
}

/// Client for gists.
pub struct GistsClient {
    transport: Arc<HttpTransport>,
}

impl GistsClient {
    /// Create a new gists client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// The authenticated user's gists, secret ones included.
    pub async fn list_mine(&self, page: Page) -> Result<Vec<Gist>, Error> {
        self.transport.load(&GistRouter::ListMine(page)).await
    }

    /// Public gists of `owner`.
    pub async fn list(&self, owner: &str, page: Page) -> Result<Vec<Gist>, Error> {
        self.transport.load(&GistRouter::List(owner, page)).await
    }

    /// Fetch a gist with file contents.
    pub async fn get(&self, id: &str) -> Result<Gist, Error> {
        self.transport.load(&GistRouter::Get(id)).await
    }

    pub async fn create(&self, gist: &CreateGist) -> Result<Gist, Error> {
        self.transport.load(&GistRouter::Create(gist)).await
    }

    /// Edit a gist. Files mapped to `None` in `update` are deleted.
    pub async fn update(&self, id: &str, update: &UpdateGist) -> Result<Gist, Error> {
        self.transport.load(&GistRouter::Update(id, update)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_routes() {
        assert_eq!(GistRouter::ListMine(Page::default()).path(), "gists");
        assert_eq!(GistRouter::List("octocat", Page::default()).path(), "users/octocat/gists");
        assert_eq!(GistRouter::Get("aa5a315d").path(), "gists/aa5a315d");

        let gist = CreateGist::new(true).file("a.md", "# Hi");
        let route = GistRouter::Create(&gist);
        assert_eq!(route.method(), Method::POST);
        assert_eq!(route.path(), "gists");
        assert_eq!(
            route.body().unwrap(),
            Some(json!({"public": true, "files": {"a.md": {"content": "# Hi"}}}))
        );

        let update = UpdateGist::new().description("Renamed");
        let route = GistRouter::Update("aa5a315d", &update);
        assert_eq!(route.method(), Method::PATCH);
        assert_eq!(route.body().unwrap(), Some(json!({"description": "Renamed"})));
    }
}
