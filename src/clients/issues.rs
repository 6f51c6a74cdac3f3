//! Issues resource client.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Value};

use crate::error::Error;
use crate::router::{repo_path, Page, Router};
use crate::transport::HttpTransport;
use crate::types::{Comment, CreateIssue, Issue, Openness, UpdateIssue};

/// Issue and issue-comment endpoints.
#[derive(Debug, Clone, Copy)]
pub enum IssueRouter<'a> {
    /// Issues assigned to the authenticated user across repositories
    ListMine(Openness, Page),
    List {
        owner: &'a str,
        repo: &'a str,
        state: Openness,
        page: Page,
    },
    Get(&'a str, &'a str, u64),
    Create(&'a str, &'a str, &'a CreateIssue),
    Update(&'a str, &'a str, u64, &'a UpdateIssue),
    Comment(&'a str, &'a str, u64, &'a str),
    Comments(&'a str, &'a str, u64, Page),
    UpdateComment(&'a str, &'a str, u64, &'a str),
}

impl Router for IssueRouter<'_> {
    fn method(&self) -> Method {
        match self {
            Self::ListMine(..) | Self::List { .. } | Self::Get(..) | Self::Comments(..) => {
                Method::GET
            }
            Self::Create(..) | Self::Comment(..) => Method::POST,
            Self::Update(..) | Self::UpdateComment(..) => Method::PATCH,
        }
    }

    fn path(&self) -> String {
        match self {
            Self::ListMine(..) => "issues".to_string(),
            Self::List { owner, repo, .. } | Self::Create(owner, repo, _) => {
                format!("{}/issues", repo_path(owner, repo))
            }
            Self::Get(owner, repo, number) | Self::Update(owner, repo, number, _) => {
                format!("{}/issues/{number}", repo_path(owner, repo))
            }
            Self::Comment(owner, repo, number, _) | Self::Comments(owner, repo, number, _) => {
                format!("{}/issues/{number}/comments", repo_path(owner, repo))
            }
            Self::UpdateComment(owner, repo, id, _) => {
                format!("{}/issues/comments/{id}", repo_path(owner, repo))
            }
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::ListMine(state, page) | Self::List { state, page, .. } => {
                let mut params = vec![("state", state.as_str().to_string())];
                page.extend(&mut params);
                params
            }
            Self::Comments(.., page) => page.params(),
            _ => Vec::new(),
        }
    }

    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        match self {
            Self::Create(.., issue) => serde_json::to_value(issue).map(Some),
            Self::Update(.., update) => serde_json::to_value(update).map(Some),
            Self::Comment(.., body) | Self::UpdateComment(.., body) => Ok(Some(json!({ "body": body }))),
            _ => Ok(None),
        }
    }
}

/// Client for issues and their comments.
pub struct IssuesClient {
    transport: Arc<HttpTransport>,
}

impl IssuesClient {
    /// Create a new issues client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Issues assigned to the authenticated user, across every repository
    /// they can see.
    pub async fn list_mine(&self, state: Openness, page: Page) -> Result<Vec<Issue>, Error> {
        self.transport.load(&IssueRouter::ListMine(state, page)).await
    }

    /// List a repository's issues. Pull requests are included, as GitHub
    /// returns them; check [`Issue::is_pull_request`].
    pub async fn list(
        &self,
        owner: &str,
        repo: &str,
        state: Openness,
        page: Page,
    ) -> Result<Vec<Issue>, Error> {
        self.transport
            .load(&IssueRouter::List {
                owner,
                repo,
                state,
                page,
            })
            .await
    }

    /// Get a single issue by number.
    pub async fn get(&self, owner: &str, repo: &str, number: u64) -> Result<Issue, Error> {
        self.transport.load(&IssueRouter::Get(owner, repo, number)).await
    }

    /// Open a new issue.
    ///
    /// # Errors
    ///
    /// Returns a validation error if GitHub rejects the fields, e.g. an
    /// unknown milestone.
    pub async fn create(&self, owner: &str, repo: &str, issue: &CreateIssue) -> Result<Issue, Error> {
        self.transport.load(&IssueRouter::Create(owner, repo, issue)).await
    }

    /// Edit an issue. Only the fields set on `update` change.
    pub async fn update(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        update: &UpdateIssue,
    ) -> Result<Issue, Error> {
        self.transport
            .load(&IssueRouter::Update(owner, repo, number, update))
            .await
    }

    /// Add a comment to an issue or pull request conversation.
    pub async fn comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> Result<Comment, Error> {
        self.transport
            .load(&IssueRouter::Comment(owner, repo, number, body))
            .await
    }

    /// List the comments on an issue.
    pub async fn comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        page: Page,
    ) -> Result<Vec<Comment>, Error> {
        self.transport
            .load(&IssueRouter::Comments(owner, repo, number, page))
            .await
    }

    /// Replace the body of an existing comment.
    pub async fn update_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<Comment, Error> {
        self.transport
            .load(&IssueRouter::UpdateComment(owner, repo, comment_id, body))
            .await
    }
}
