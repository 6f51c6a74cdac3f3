//! Followers and following.

use std::sync::Arc;

use reqwest::Method;

use crate::error::Error;
use crate::router::{encode_segment, Page, Router};
use crate::transport::HttpTransport;
use crate::types::User;

/// Follow-graph endpoints. `None` means the authenticated user.
#[derive(Debug, Clone, Copy)]
pub enum FollowRouter<'a> {
    Followers(Option<&'a str>, Page),
    Following(Option<&'a str>, Page),
}

impl Router for FollowRouter<'_> {
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        match self {
            Self::Followers(None, _) => "user/followers".to_string(),
            Self::Followers(Some(name), _) => format!("users/{}/followers", encode_segment(name)),
            Self::Following(None, _) => "user/following".to_string(),
            Self::Following(Some(name), _) => format!("users/{}/following", encode_segment(name)),
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Followers(_, page) | Self::Following(_, page) => page.params(),
        }
    }
}

/// Client for the follow graph.
pub struct FollowsClient {
    transport: Arc<HttpTransport>,
}

impl FollowsClient {
    /// Create a new follows client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Users following `name`, or the authenticated user when `None`.
    pub async fn followers(&self, name: Option<&str>, page: Page) -> Result<Vec<User>, Error> {
        self.transport.load(&FollowRouter::Followers(name, page)).await
    }

    /// Users that `name` follows, or the authenticated user when `None`.
    pub async fn following(&self, name: Option<&str>, page: Page) -> Result<Vec<User>, Error> {
        self.transport.load(&FollowRouter::Following(name, page)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes() {
        let page = Page::default();
        assert_eq!(FollowRouter::Followers(None, page).path(), "user/followers");
        assert_eq!(
            FollowRouter::Followers(Some("octocat"), page).path(),
            "users/octocat/followers"
        );
        assert_eq!(FollowRouter::Following(None, page).path(), "user/following");
        assert_eq!(
            FollowRouter::Following(Some("octocat"), page).path(),
            "users/octocat/following"
        );
    }

    #[test]
    fn test_pagination_params() {
        let route = FollowRouter::Followers(None, Page::new(3, 50));
        assert_eq!(
            route.params(),
            vec![("page", "3".to_string()), ("per_page", "50".to_string())]
        );
    }
}
