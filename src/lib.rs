//! Typed client for the GitHub REST API.
//!
//! Every endpoint is described by a router enum, sent through a shared
//! transport, and decoded into serde models. The network layer is a
//! [`Session`] trait so tests can replace it with
//! [`testing::MockSession`].
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use octokit::testing::{MockResponse, MockSession};
//! use octokit::{Octokit, TokenConfiguration};
//!
//! let session = Arc::new(MockSession::new());
//! session.push(MockResponse::json(200, r#"{"login": "octocat", "id": 1}"#));
//!
//! let client = Octokit::with_session(TokenConfiguration::new(Some("12345")), session.clone());
//! let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let user = runtime.block_on(client.users().me()).unwrap();
//!
//! assert_eq!(user.login, "octocat");
//! assert_eq!(session.last_call().unwrap().header("authorization"), Some("Bearer 12345"));
//! ```

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod oauth;
pub mod router;
pub mod testing;
pub mod time;
pub mod transport;
pub mod types;

// Re-exports
pub use client::Octokit;
pub use clients::{
    FollowsClient, GistsClient, GitClient, IssuesClient, KeysClient, LabelsClient,
    MilestonesClient, NotificationsClient, OrgsClient, PullsClient, ReleasesClient, ReposClient,
    ReviewsClient, SearchClient, StarsClient, StatusesClient, UsersClient,
};
pub use config::{Credential, PreviewHeader, TokenConfiguration};
pub use error::{Error, GitHubError, ERROR_DOMAIN};
pub use oauth::{parse_access_token, OAuthConfiguration};
pub use router::{Encoding, Page, Router};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestSession, Session};
pub use types::{
    CodeSearchResult, Comment, CreateGist, CreateIssue, CreateLabel, CreateMilestone,
    CreatePublicKey, CreatePullRequest, CreateRelease, CreateReview, CreateStatus,
    DraftReviewComment, FileStatus, Gist, GistFile, Issue, Label, License, Milestone,
    NotificationFilter, NotificationSubject, NotificationThread, Openness, Organization, Plan,
    PublicKey, PullRequest, PullRequestFile, PullRequestFilter, PullRequestRef, Reactions,
    Release, ReleaseAsset, Repository, Review, ReviewEvent, ReviewState, SearchResponse, Status,
    StatusState, Team, ThreadSubscription, UpdateGist, UpdateIssue, UpdatePullRequest, User,
};
