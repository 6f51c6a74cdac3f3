//! Milestones resource client.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::error::Error;
use crate::router::{repo_path, Page, Router};
use crate::transport::HttpTransport;
use crate::types::{CreateMilestone, Milestone, Openness};

/// Milestone endpoints.
#[derive(Debug, Clone, Copy)]
pub enum MilestoneRouter<'a> {
    List(&'a str, &'a str, Openness, Page),
    Get(&'a str, &'a str, u64),
    Create(&'a str, &'a str, &'a CreateMilestone),
}

impl Router for MilestoneRouter<'_> {
    fn method(&self) -> Method {
        match self {
            Self::List(..) | Self::Get(..) => Method::GET,
            Self::Create(..) => Method::POST,
        }
    }

    fn path(&self) -> String {
        match self {
            Self::List(owner, repo, ..) | Self::Create(owner, repo, _) => {
                format!("{}/milestones", repo_path(owner, repo))
            }
            Self::Get(owner, repo, number) => {
                format!("{}/milestones/{number}", repo_path(owner, repo))
            }
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::List(_, _, state, page) => {
                let mut params = vec![("state", state.as_str().to_string())];
                page.extend(&mut params);
                params
            }
            _ => Vec::new(),
        }
    }

    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        match self {
            Self::Create(.., milestone) => serde_json::to_value(milestone).map(Some),
            _ => Ok(None),
        }
    }
}

/// Client for repository milestones.
pub struct MilestonesClient {
    transport: Arc<HttpTransport>,
}

impl MilestonesClient {
    /// Create a new milestones client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn list(
        &self,
        owner: &str,
        repo: &str,
        state: Openness,
        page: Page,
    ) -> Result<Vec<Milestone>, Error> {
        self.transport
            .load(&MilestoneRouter::List(owner, repo, state, page))
            .await
    }

    pub async fn get(&self, owner: &str, repo: &str, number: u64) -> Result<Milestone, Error> {
        self.transport.load(&MilestoneRouter::Get(owner, repo, number)).await
    }

    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        milestone: &CreateMilestone,
    ) -> Result<Milestone, Error> {
        self.transport
            .load(&MilestoneRouter::Create(owner, repo, milestone))
            .await
    }
}
