//! Error types for the octokit client.
//!
//! Every call resolves to exactly one of these. Non-2xx responses become
//! [`GitHubError`], network failures from the session become
//! [`Error::Transport`], and bodies that do not match the expected model
//! become [`Error::Decode`].

use thiserror::Error;

/// Fixed domain identifier attached to every API error.
pub const ERROR_DOMAIN: &str = "com.nerdishbynature.octokit";

/// Main error type for the octokit client.
#[derive(Error, Debug)]
pub enum Error {
    /// GitHub answered with a non-2xx status
    #[error(transparent)]
    Api(#[from] GitHubError),

    /// Network or connectivity failure reported by the session
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Response body did not match the expected model
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request body could not be serialized
    #[error("Encode error: {0}")]
    Encode(String),

    /// Endpoint or path did not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// OAuth code exchange failed
    #[error("OAuth error: {0}")]
    OAuth(String),
}

impl Error {
    /// HTTP status code of an API error.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status()),
            _ => None,
        }
    }

    /// Whether GitHub answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(GitHubError::NotFound { .. }))
    }

    pub(crate) fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(err))
    }
}

/// Typed API errors, one variant per status category.
///
/// `message` is GitHub's `message` field when the error body carries one,
/// otherwise `HTTP <status>`.
#[derive(Error, Debug, Clone)]
pub enum GitHubError {
    /// Bad or missing credentials (401).
    #[error("[{status}] {message}")]
    Authentication {
        status: u16,
        message: String,
        documentation_url: Option<String>,
        request_id: Option<String>,
    },

    /// Authenticated but not allowed (403).
    #[error("[{status}] {message}")]
    Forbidden {
        status: u16,
        message: String,
        documentation_url: Option<String>,
        request_id: Option<String>,
    },

    /// Resource does not exist or is hidden from the caller (404).
    #[error("[{status}] {message}")]
    NotFound {
        status: u16,
        message: String,
        documentation_url: Option<String>,
        request_id: Option<String>,
    },

    /// Rate limit exhausted (429, or 403 with no remaining requests).
    #[error("[{status}] {message}")]
    RateLimited {
        status: u16,
        message: String,
        documentation_url: Option<String>,
        request_id: Option<String>,
        retry_after: Option<u32>,
    },

    /// Any other 4xx, usually 422 validation failures.
    #[error("[{status}] {message}")]
    Validation {
        status: u16,
        message: String,
        documentation_url: Option<String>,
        request_id: Option<String>,
    },

    /// Server errors (5xx) and unexpected non-2xx statuses.
    #[error("[{status}] {message}")]
    Server {
        status: u16,
        message: String,
        documentation_url: Option<String>,
        request_id: Option<String>,
    },
}

impl GitHubError {
    /// The HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Authentication { status, .. }
            | Self::Forbidden { status, .. }
            | Self::NotFound { status, .. }
            | Self::RateLimited { status, .. }
            | Self::Validation { status, .. }
            | Self::Server { status, .. } => *status,
        }
    }

    /// Get the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Authentication { message, .. }
            | Self::Forbidden { message, .. }
            | Self::NotFound { message, .. }
            | Self::RateLimited { message, .. }
            | Self::Validation { message, .. }
            | Self::Server { message, .. } => message,
        }
    }

    /// Link to the GitHub docs for this error, if the body had one.
    #[must_use]
    pub fn documentation_url(&self) -> Option<&str> {
        match self {
            Self::Authentication { documentation_url, .. }
            | Self::Forbidden { documentation_url, .. }
            | Self::NotFound { documentation_url, .. }
            | Self::RateLimited { documentation_url, .. }
            | Self::Validation { documentation_url, .. }
            | Self::Server { documentation_url, .. } => documentation_url.as_deref(),
        }
    }

    /// Value of the `X-GitHub-Request-Id` response header.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Authentication { request_id, .. }
            | Self::Forbidden { request_id, .. }
            | Self::NotFound { request_id, .. }
            | Self::RateLimited { request_id, .. }
            | Self::Validation { request_id, .. }
            | Self::Server { request_id, .. } => request_id.as_deref(),
        }
    }

    /// Get the retry-after value for rate limited errors.
    #[must_use]
    pub fn retry_after(&self) -> Option<u32> {
        match self {
            Self::RateLimited { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// The fixed error domain shared by all API errors.
    #[must_use]
    pub fn domain(&self) -> &'static str {
        ERROR_DOMAIN
    }
}
