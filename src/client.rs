//! Top-level GitHub client.
//!
//! Aggregates every resource client over one shared transport.

use std::sync::Arc;

use crate::clients::{
    FollowsClient, GistsClient, GitClient, IssuesClient, KeysClient, LabelsClient,
    MilestonesClient, NotificationsClient, OrgsClient, PullsClient, ReleasesClient, ReposClient,
    ReviewsClient, SearchClient, StarsClient, StatusesClient, UsersClient,
};
use crate::config::TokenConfiguration;
use crate::error::Error;
use crate::transport::{HttpTransport, Session};

/// Main client for the GitHub REST API.
///
/// There is no shared global instance; build one per configuration and
/// pass it where it is needed. Clones of the transport are cheap, so the
/// client can be wrapped in an `Arc` and used from many tasks.
///
/// # Example
///
/// ```rust,no_run
/// use octokit::{Octokit, Page, TokenConfiguration};
///
/// # async fn run() -> Result<(), octokit::Error> {
/// let client = Octokit::new(TokenConfiguration::new(Some("ghp_example")))?;
///
/// let me = client.users().me().await?;
/// println!("Hello, {}", me.login);
///
/// let repos = client.repos().list(None, Page::default()).await?;
/// client.stars().star("octocat", "Hello-World").await?;
/// # let _ = repos;
/// # Ok(())
/// # }
/// ```
pub struct Octokit {
    transport: Arc<HttpTransport>,
    users: UsersClient,
    follows: FollowsClient,
    repos: ReposClient,
    stars: StarsClient,
    issues: IssuesClient,
    labels: LabelsClient,
    milestones: MilestonesClient,
    pulls: PullsClient,
    reviews: ReviewsClient,
    releases: ReleasesClient,
    statuses: StatusesClient,
    gists: GistsClient,
    notifications: NotificationsClient,
    search: SearchClient,
    orgs: OrgsClient,
    keys: KeysClient,
    git: GitClient,
}

impl Octokit {
    /// Create a new client using the default `reqwest` session.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: TokenConfiguration) -> Result<Self, Error> {
        Ok(Self::from_transport(Arc::new(HttpTransport::new(config)?)))
    }

    /// Create a client around an injected session.
    ///
    /// This is how tests swap in [`MockSession`](crate::testing::MockSession).
    #[must_use]
    pub fn with_session(config: TokenConfiguration, session: Arc<dyn Session>) -> Self {
        Self::from_transport(Arc::new(HttpTransport::with_session(config, session)))
    }

    /// Create a client from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `GITHUB_TOKEN` - Access token (optional)
    /// * `GITHUB_API_URL` - API endpoint (optional, default: <https://api.github.com>)
    ///
    /// # Errors
    ///
    /// Returns an error if `GITHUB_API_URL` is invalid or the HTTP client
    /// cannot be created.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(TokenConfiguration::from_env()?)
    }

    fn from_transport(transport: Arc<HttpTransport>) -> Self {
        Self {
            users: UsersClient::new(Arc::clone(&transport)),
            follows: FollowsClient::new(Arc::clone(&transport)),
            repos: ReposClient::new(Arc::clone(&transport)),
            stars: StarsClient::new(Arc::clone(&transport)),
            issues: IssuesClient::new(Arc::clone(&transport)),
            labels: LabelsClient::new(Arc::clone(&transport)),
            milestones: MilestonesClient::new(Arc::clone(&transport)),
            pulls: PullsClient::new(Arc::clone(&transport)),
            reviews: ReviewsClient::new(Arc::clone(&transport)),
            releases: ReleasesClient::new(Arc::clone(&transport)),
            statuses: StatusesClient::new(Arc::clone(&transport)),
            gists: GistsClient::new(Arc::clone(&transport)),
            notifications: NotificationsClient::new(Arc::clone(&transport)),
            search: SearchClient::new(Arc::clone(&transport)),
            orgs: OrgsClient::new(Arc::clone(&transport)),
            keys: KeysClient::new(Arc::clone(&transport)),
            git: GitClient::new(Arc::clone(&transport)),
            transport,
        }
    }

    /// Get the configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &TokenConfiguration {
        self.transport.config()
    }

    /// Get the underlying HTTP transport (for custom routes).
    #[must_use]
    pub fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }

    #[must_use]
    pub fn users(&self) -> &UsersClient {
        &self.users
    }

    #[must_use]
    pub fn follows(&self) -> &FollowsClient {
        &self.follows
    }

    /// Get the repos client.
    #[must_use]
    pub fn repos(&self) -> &ReposClient {
        &self.repos
    }

    /// Get the stars client.
    #[must_use]
    pub fn stars(&self) -> &StarsClient {
        &self.stars
    }

    /// Get the issues client.
    #[must_use]
    pub fn issues(&self) -> &IssuesClient {
        &self.issues
    }

    #[must_use]
    pub fn labels(&self) -> &LabelsClient {
        &self.labels
    }

    #[must_use]
    pub fn milestones(&self) -> &MilestonesClient {
        &self.milestones
    }

    /// Get the pulls client.
    #[must_use]
    pub fn pulls(&self) -> &PullsClient {
        &self.pulls
    }

    /// Get the reviews client.
    #[must_use]
    pub fn reviews(&self) -> &ReviewsClient {
        &self.reviews
    }

    #[must_use]
    pub fn releases(&self) -> &ReleasesClient {
        &self.releases
    }

    #[must_use]
    pub fn statuses(&self) -> &StatusesClient {
        &self.statuses
    }

    #[must_use]
    pub fn gists(&self) -> &GistsClient {
        &self.gists
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationsClient {
        &self.notifications
    }

    #[must_use]
    pub fn search(&self) -> &SearchClient {
        &self.search
    }

    #[must_use]
    pub fn orgs(&self) -> &OrgsClient {
        &self.orgs
    }

    #[must_use]
    pub fn keys(&self) -> &KeysClient {
        &self.keys
    }

    #[must_use]
    pub fn git(&self) -> &GitClient {
        &self.git
    }
}
