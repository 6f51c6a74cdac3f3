//! Client configuration: API endpoint, credential and extra headers.

use std::env;
use std::fmt;

use reqwest::Url;

use crate::error::Error;

/// Public GitHub API endpoint.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Public GitHub web endpoint, used for OAuth.
pub const GITHUB_WEB_URL: &str = "https://github.com/";

/// Default media type sent in `Accept` when no preview is requested.
pub const DEFAULT_ACCEPT: &str = "application/vnd.github+json";

/// Opt-in media types for preview API shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewHeader {
    /// Reaction counts on issues and comments
    Reactions,
    /// Draft pull requests
    Drafts,
    /// Any other preview media type
    Custom(String),
}

impl PreviewHeader {
    /// The `Accept` value for this preview.
    #[must_use]
    pub fn media_type(&self) -> &str {
        match self {
            Self::Reactions => "application/vnd.github.squirrel-girl-preview",
            Self::Drafts => "application/vnd.github.shadow-cat-preview+json",
            Self::Custom(media_type) => media_type,
        }
    }
}

/// How the access token is presented to GitHub.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// OAuth or personal access token, sent as `Authorization: Bearer`.
    Bearer(String),
    /// `username:password` pair, sent as HTTP Basic auth.
    Basic { username: String, password: String },
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(_) => f.write_str("Bearer(<redacted>)"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

impl Credential {
    /// Tokens containing `:` are split at the first colon into a Basic pair.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token.split_once(':') {
            Some((username, password)) => Self::Basic {
                username: username.to_string(),
                password: password.to_string(),
            },
            None => Self::Bearer(token.to_string()),
        }
    }
}

/// Token-based configuration for API calls.
///
/// # Example
///
/// ```rust
/// use octokit::{PreviewHeader, TokenConfiguration};
///
/// let config = TokenConfiguration::new(Some("ghp_example"))
///     .with_api_endpoint("https://ghe.example.com/api/v3")
///     .with_preview(PreviewHeader::Reactions);
/// assert_eq!(config.api_endpoint, "https://ghe.example.com/api/v3");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct TokenConfiguration {
    /// Base URL every route path is joined onto
    pub api_endpoint: String,
    /// Bearer token, or `username:password` for Basic auth
    pub access_token: Option<String>,
    /// Preview media types; replace the default `Accept` when non-empty
    pub preview_headers: Vec<PreviewHeader>,
    /// Extra headers added to every request
    pub custom_headers: Vec<(String, String)>,
}

impl Default for TokenConfiguration {
    fn default() -> Self {
        Self {
            api_endpoint: GITHUB_API_URL.to_string(),
            access_token: None,
            preview_headers: Vec::new(),
            custom_headers: Vec::new(),
        }
    }
}

impl fmt::Debug for TokenConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfiguration")
            .field("api_endpoint", &self.api_endpoint)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("preview_headers", &self.preview_headers)
            .field("custom_headers", &self.custom_headers)
            .finish()
    }
}

impl TokenConfiguration {
    /// Configuration for the public API with an optional token.
    #[must_use]
    pub fn new(token: Option<&str>) -> Self {
        Self {
            access_token: token.map(str::to_string),
            ..Self::default()
        }
    }

    /// Configuration for a GitHub Enterprise instance.
    #[must_use]
    pub fn enterprise(token: Option<&str>, api_endpoint: &str) -> Self {
        Self::new(token).with_api_endpoint(api_endpoint)
    }

    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `GITHUB_TOKEN` - Access token (optional; unauthenticated if unset)
    /// * `GITHUB_API_URL` - API endpoint (optional, default: <https://api.github.com>)
    ///
    /// # Errors
    ///
    /// Returns an error if `GITHUB_API_URL` is set but is not a valid URL.
    pub fn from_env() -> Result<Self, Error> {
        let token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());
        let mut config = Self::new(token.as_deref());

        if let Ok(endpoint) = env::var("GITHUB_API_URL") {
            Url::parse(&endpoint).map_err(|e| {
                Error::Configuration(format!("Invalid GITHUB_API_URL {endpoint:?}: {e}"))
            })?;
            config.api_endpoint = endpoint;
        }

        Ok(config)
    }

    #[must_use]
    pub fn with_api_endpoint(mut self, api_endpoint: &str) -> Self {
        self.api_endpoint = api_endpoint.to_string();
        self
    }

    #[must_use]
    pub fn with_preview(mut self, preview: PreviewHeader) -> Self {
        self.preview_headers.push(preview);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.custom_headers.push((name.to_string(), value.to_string()));
        self
    }

    /// The credential derived from the access token, if any.
    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        self.access_token.as_deref().map(Credential::from_token)
    }

    /// Value of the `Accept` header for every request.
    #[must_use]
    pub fn accept(&self) -> String {
        if self.preview_headers.is_empty() {
            DEFAULT_ACCEPT.to_string()
        } else {
            self.preview_headers
                .iter()
                .map(PreviewHeader::media_type)
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_public_endpoint() {
        let config = TokenConfiguration::new(Some("12345"));
        assert_eq!(config.api_endpoint, "https://api.github.com");
        assert_eq!(config.access_token.as_deref(), Some("12345"));
        assert!(config.preview_headers.is_empty());
    }

    #[test]
    fn test_enterprise_keeps_token_handling() {
        let public = TokenConfiguration::new(Some("12345"));
        let enterprise = TokenConfiguration::enterprise(Some("12345"), "https://ghe.example.com/api/v3");

        assert_eq!(enterprise.api_endpoint, "https://ghe.example.com/api/v3");
        assert_eq!(enterprise.access_token, public.access_token);
        assert_eq!(enterprise.credential(), public.credential());
    }

    #[test]
    fn test_token_without_colon_is_bearer() {
        let config = TokenConfiguration::new(Some("ghp_abc"));
        assert_eq!(config.credential(), Some(Credential::Bearer("ghp_abc".to_string())));
    }

    #[test]
    fn test_token_with_colon_is_basic() {
        let config = TokenConfiguration::new(Some("octocat:pass:word"));
        assert_eq!(
            config.credential(),
            Some(Credential::Basic {
                username: "octocat".to_string(),
                password: "pass:word".to_string(),
            })
        );
    }

    #[test]
    fn test_no_token_no_credential() {
        assert_eq!(TokenConfiguration::new(None).credential(), None);
    }

    #[test]
    fn test_accept_with_previews() {
        let config = TokenConfiguration::default();
        assert_eq!(config.accept(), "application/vnd.github+json");

        let config = config
            .with_preview(PreviewHeader::Reactions)
            .with_preview(PreviewHeader::Custom("application/vnd.github.mercy-preview+json".to_string()));
        assert_eq!(
            config.accept(),
            "application/vnd.github.squirrel-girl-preview, application/vnd.github.mercy-preview+json"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = TokenConfiguration::new(Some("super-secret"));
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));

        let credential = Credential::from_token("octocat:hunter2");
        assert!(!format!("{credential:?}").contains("hunter2"));
    }
}
