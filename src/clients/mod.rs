//! Resource clients.
//!
//! Each module pairs a router enum (one variant per endpoint) with a thin
//! client that sends those routes through the shared [`HttpTransport`].
//!
//! [`HttpTransport`]: crate::transport::HttpTransport

pub mod follows;
pub mod gists;
pub mod git;
pub mod issues;
pub mod keys;
pub mod labels;
pub mod milestones;
pub mod notifications;
pub mod orgs;
pub mod pulls;
pub mod releases;
pub mod repos;
pub mod reviews;
pub mod search;
pub mod stars;
pub mod statuses;
pub mod users;

// Re-exports
pub use follows::{FollowRouter, FollowsClient};
pub use gists::{GistRouter, GistsClient};
pub use git::{GitClient, GitRouter};
pub use issues::{IssueRouter, IssuesClient};
pub use keys::{KeysClient, PublicKeyRouter};
pub use labels::{LabelRouter, LabelsClient};
pub use milestones::{MilestoneRouter, MilestonesClient};
pub use notifications::{NotificationRouter, NotificationsClient};
pub use orgs::{OrganizationRouter, OrgsClient};
pub use pulls::{PullRequestRouter, PullsClient};
pub use releases::{ReleaseRouter, ReleasesClient};
pub use repos::{ReposClient, RepositoryRouter};
pub use reviews::{ReviewRouter, ReviewsClient};
pub use search::{SearchClient, SearchRouter};
pub use stars::{StarRouter, StarsClient};
pub use statuses::{StatusRouter, StatusesClient};
pub use users::{UserRouter, UsersClient};
