//! Labels resource client.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::error::Error;
use crate::router::{encode_segment, repo_path, Page, Router};
use crate::transport::HttpTransport;
use crate::types::{CreateLabel, Label};

/// Label endpoints.
#[derive(Debug, Clone, Copy)]
pub enum LabelRouter<'a> {
    Get(&'a str, &'a str, &'a str),
    List(&'a str, &'a str, Page),
    Create(&'a str, &'a str, &'a CreateLabel),
}

impl Router for LabelRouter<'_> {
    fn method(&self) -> Method {
        match self {
            Self::Get(..) | Self::List(..) => Method::GET,
            Self::Create(..) => Method::POST,
        }
    }

    fn path(&self) -> String {
        match self {
            Self::Get(owner, repo, name) => {
                format!("{}/labels/{}", repo_path(owner, repo), encode_segment(name))
            }
            Self::List(owner, repo, _) | Self::Create(owner, repo, _) => {
                format!("{}/labels", repo_path(owner, repo))
            }
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
            Self::Create(.., label) => serde_json::to_value(label).map(Some),
            _ => Ok(None),
        }
    }
}

/// Client for repository labels.
pub struct LabelsClient {
    transport: Arc<HttpTransport>,
}

impl LabelsClient {
    /// Create a new labels client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Get a label by name. Names with spaces or other reserved characters
    /// are percent-encoded.
    pub async fn get(&self, owner: &str, repo: &str, name: &str) -> Result<Label, Error> {
        self.transport.load(&LabelRouter::Get(owner, repo, name)).await
    }

    pub async fn list(&self, owner: &str, repo: &str, page: Page) -> Result<Vec<Label>, Error> {
        self.transport.load(&LabelRouter::List(owner, repo, page)).await
    }

    /// Create a label.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is taken or the color is not
    /// a six-digit hex value.
    pub async fn create(&self, owner: &str, repo: &str, label: &CreateLabel) -> Result<Label, Error> {
        self.transport.load(&LabelRouter::Create(owner, repo, label)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_name_is_encoded() {
        assert_eq!(
            LabelRouter::Get("octocat", "Hello-World", "help wanted").path(),
            "repos/octocat/Hello-World/labels/help%20wanted"
        );
    }

    #[test]
    fn test_create_route() {
        let label = CreateLabel::new("bug", "f29513");
        let route = LabelRouter::Create("o", "r", &label);
        assert_eq!(route.method(), Method::POST);
        assert_eq!(route.path(), "repos/o/r/labels");
        assert_eq!(
            route.body().unwrap(),
            Some(serde_json::json!({"name": "bug", "color": "f29513"}))
        );
    }
}
