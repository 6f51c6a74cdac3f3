//! Organizations and teams.

use std::sync::Arc;

use reqwest::Method;

use crate::error::Error;
use crate::router::{encode_segment, Page, Router};
use crate::transport::HttpTransport;
use crate::types::{Organization, Team};

/// Organization endpoints.
#[derive(Debug, Clone, Copy)]
pub enum OrganizationRouter<'a> {
    ListMine(Page),
    ListForUser(&'a str, Page),
    Get(&'a str),
    Teams(&'a str, Page),
    MyTeams(Page),
}

impl Router for OrganizationRouter<'_> {
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        match self {
            Self::ListMine(_) => "user/orgs".to_string(),
            Self::ListForUser(name, _) => format!("users/{}/orgs", encode_segment(name)),
            Self::Get(org) => format!("orgs/{}", encode_segment(org)),
            Self::Teams(org, _) => format!("orgs/{}/teams", encode_segment(org)),
            Self::MyTeams(_) => "user/teams".to_string(),
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::ListMine(page)
            | Self::ListForUser(_, page)
            | Self::Teams(_, page)
            | Self::MyTeams(page) => page.params(),
            Self::Get(_) => Vec::new(),
        }
    }
}

/// Client for organizations and their teams.
pub struct OrgsClient {
    transport: Arc<HttpTransport>,
}

impl OrgsClient {
    /// Create a new orgs client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Organizations the authenticated user belongs to.
    pub async fn list_mine(&self, page: Page) -> Result<Vec<Organization>, Error> {
        self.transport.load(&OrganizationRouter::ListMine(page)).await
    }

    /// Public organization memberships of a user.
    pub async fn list_for_user(&self, name: &str, page: Page) -> Result<Vec<Organization>, Error> {
        self.transport
            .load(&OrganizationRouter::ListForUser(name, page))
            .await
    }

    pub async fn get(&self, org: &str) -> Result<Organization, Error> {
        self.transport.load(&OrganizationRouter::Get(org)).await
    }

    /// Teams in an organization visible to the caller.
    pub async fn teams(&self, org: &str, page: Page) -> Result<Vec<Team>, Error> {
        self.transport.load(&OrganizationRouter::Teams(org, page)).await
    }

    /// Teams the authenticated user is a member of, across organizations.
    pub async fn my_teams(&self, page: Page) -> Result<Vec<Team>, Error> {
        self.transport.load(&OrganizationRouter::MyTeams(page)).await
    }
}
