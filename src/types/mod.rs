//! Data model types for the GitHub REST API.
//!
//! Response models decode GitHub's snake_case JSON directly. Fields GitHub
//! may omit are `Option`s; lists default to empty. Request bodies are typed
//! structs that skip unset fields when serialized.

pub mod gists;
pub mod issues;
pub mod keys;
pub mod labels;
pub mod milestones;
pub mod notifications;
pub mod orgs;
pub mod pulls;
pub mod reactions;
pub mod releases;
pub mod repos;
pub mod reviews;
pub mod search;
pub mod statuses;
pub mod users;

// Re-exports
pub use gists::{CreateGist, Gist, GistFile, GistFileContent, UpdateGist};
pub use issues::{Comment, CreateIssue, Issue, IssuePullRequest, Openness, UpdateIssue};
pub use keys::{CreatePublicKey, PublicKey};
pub use labels::{CreateLabel, Label};
pub use milestones::{CreateMilestone, Milestone};
pub use notifications::{
    NotificationFilter, NotificationSubject, NotificationThread, ThreadSubscription,
};
pub use orgs::{Organization, Team};
pub use pulls::{
    CreatePullRequest, FileStatus, PullRequest, PullRequestFile, PullRequestFilter,
    PullRequestRef, PullRequestSort, SortDirection, UpdatePullRequest,
};
pub use reactions::Reactions;
pub use releases::{CreateRelease, Release, ReleaseAsset};
pub use repos::{License, Repository};
pub use reviews::{CreateReview, DraftReviewComment, Review, ReviewEvent, ReviewState};
pub use search::{CodeSearchResult, SearchResponse};
pub use statuses::{CreateStatus, Status, StatusState};
pub use users::{Plan, User};
