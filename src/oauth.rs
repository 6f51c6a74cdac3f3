//! OAuth web flow helpers.
//!
//! Covers the parts of the flow that do not need a browser: building the
//! authorize URL, pulling the `code` out of the callback URL, and trading
//! that code for an access token.

use std::fmt;
use std::sync::Arc;

use reqwest::{Method, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{TokenConfiguration, GITHUB_API_URL, GITHUB_WEB_URL};
use crate::error::Error;
use crate::router::{Encoding, Router};
use crate::transport::{HttpTransport, ReqwestSession, Session};

/// OAuth app credentials plus the endpoints to talk to.
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthConfiguration {
    /// API endpoint handed to the [`TokenConfiguration`] after the exchange
    pub api_endpoint: String,
    /// Web endpoint hosting `login/oauth/*`
    pub web_endpoint: String,
    pub client_id: String,
    pub client_secret: String,
    /// Requested scopes, e.g. `repo`, `read:org`
    pub scopes: Vec<String>,
}

impl fmt::Debug for OAuthConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthConfiguration")
            .field("api_endpoint", &self.api_endpoint)
            .field("web_endpoint", &self.web_endpoint)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("scopes", &self.scopes)
            .finish()
    }
}

impl OAuthConfiguration {
    /// Configuration for github.com.
    #[must_use]
    pub fn new<I, S>(client_id: &str, client_secret: &str, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            api_endpoint: GITHUB_API_URL.to_string(),
            web_endpoint: GITHUB_WEB_URL.to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            scopes: scopes.into_iter().map(Into::into).collect(),
        }
    }

    /// Point both endpoints at a GitHub Enterprise instance.
    #[must_use]
    pub fn with_endpoints(mut self, api_endpoint: &str, web_endpoint: &str) -> Self {
        self.api_endpoint = api_endpoint.to_string();
        self.web_endpoint = web_endpoint.to_string();
        self
    }

    /// The page to send the user to:
    /// `{web}login/oauth/authorize?scope=a,b&client_id=...`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the web endpoint is not a URL.
    pub fn authorize_url(&self) -> Result<Url, Error> {
        let scope = self
            .scopes
            .iter()
            .map(|s| urlencoding::encode(s).into_owned())
            .collect::<Vec<_>>()
            .join(",");
        let raw = format!(
            "{}login/oauth/authorize?scope={scope}&client_id={}",
            self.web_base(),
            urlencoding::encode(&self.client_id)
        );
        Url::parse(&raw).map_err(|e| Error::InvalidUrl(format!("{raw}: {e}")))
    }

    /// Extract the `code` query parameter from the URL GitHub redirected to.
    #[must_use]
    pub fn code_from_callback(url: &str) -> Option<String> {
        Url::parse(url)
            .ok()?
            .query_pairs()
            .find(|(key, _)| key == "code")
            .map(|(_, value)| value.into_owned())
    }

    /// Exchange a callback code for a token using the default session.
    ///
    /// # Errors
    ///
    /// See [`exchange_code_with`](Self::exchange_code_with).
    pub async fn exchange_code(&self, code: &str) -> Result<TokenConfiguration, Error> {
        let session: Arc<dyn Session> = Arc::new(ReqwestSession::new()?);
        self.exchange_code_with(session, code).await
    }

    /// Exchange a callback code for a token.
    ///
    /// Posts the app credentials and the code, form encoded, to
    /// `{web}login/oauth/access_token` and returns a configuration carrying
    /// the token and this configuration's API endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OAuth`] when GitHub rejects the code, and the usual
    /// transport or API errors otherwise.
    pub async fn exchange_code_with(
        &self,
        session: Arc<dyn Session>,
        code: &str,
    ) -> Result<TokenConfiguration, Error> {
        let web = TokenConfiguration::new(None).with_api_endpoint(&self.web_base());
        let transport = HttpTransport::with_session(web, session);

        debug!(client_id = %self.client_id, "Exchanging OAuth code");
        let body = transport
            .load_text(&OAuthRouter::AccessToken { config: self, code })
            .await?;
        let token = parse_access_token(&body)?;

        Ok(TokenConfiguration::new(Some(&token)).with_api_endpoint(&self.api_endpoint))
    }

    fn web_base(&self) -> String {
        format!("{}/", self.web_endpoint.trim_end_matches('/'))
    }
}

/// OAuth endpoints, relative to the web endpoint.
#[derive(Debug, Clone, Copy)]
pub enum OAuthRouter<'a> {
    AccessToken {
        config: &'a OAuthConfiguration,
        code: &'a str,
    },
}

impl Router for OAuthRouter<'_> {
    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "login/oauth/access_token".to_string()
    }

    fn encoding(&self) -> Encoding {
        Encoding::Form
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::AccessToken { config, code } => vec![
                ("client_id", config.client_id.clone()),
                ("client_secret", config.client_secret.clone()),
                ("code", (*code).to_string()),
            ],
        }
    }
}

/// Pull the `access_token` out of a token endpoint response.
///
/// GitHub answers `access_token=...&scope=...&token_type=bearer` by default
/// and a JSON object when asked for one; both are accepted.
///
/// # Errors
///
/// Returns [`Error::OAuth`] when the body carries an `error` or has no
/// token.
pub fn parse_access_token(body: &str) -> Result<String, Error> {
    let body = body.trim();
    let fields: Vec<(String, String)> = if body.starts_with('{') {
        let value: Value = serde_json::from_str(body)?;
        value
            .as_object()
            .map(|map| {
                map.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default()
    } else {
        serde_urlencoded::from_str(body).map_err(|e| Error::OAuth(e.to_string()))?
    };

    if let Some(error) = field(&fields, "error") {
        let message = field(&fields, "error_description").unwrap_or(error);
        warn!(error, "OAuth token exchange rejected");
        return Err(Error::OAuth(message.to_string()));
    }

    match field(&fields, "access_token") {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(Error::OAuth("Response carried no access_token".to_string())),
    }
}

fn field<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockResponse, MockSession};

    fn config() -> OAuthConfiguration {
        OAuthConfiguration::new("client_id", "client_secret", ["repo", "read:org"])
    }

    #[test]
    fn test_authorize_url() {
        let url = config().authorize_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://github.com/login/oauth/authorize?scope=repo,read%3Aorg&client_id=client_id"
        );
    }

    #[test]
    fn test_authorize_url_enterprise() {
        let config = config().with_endpoints("https://ghe.example.com/api/v3", "https://ghe.example.com");
        let url = config.authorize_url().unwrap();
        assert!(url
            .as_str()
            .starts_with("https://ghe.example.com/login/oauth/authorize?"));
    }

    #[test]
    fn test_code_from_callback() {
        assert_eq!(
            OAuthConfiguration::code_from_callback("myapp://oauth?code=dhfjgh23493&state=x"),
            Some("dhfjgh23493".to_string())
        );
        assert_eq!(OAuthConfiguration::code_from_callback("myapp://oauth?state=x"), None);
        assert_eq!(OAuthConfiguration::code_from_callback("not a url"), None);
    }

    #[test]
    fn test_parse_urlencoded_token() {
        let token =
            parse_access_token("access_token=017ec60f4a182&scope=repo%2Cgist&token_type=bearer").unwrap();
        assert_eq!(token, "017ec60f4a182");
    }

    #[test]
    fn test_parse_json_token() {
        let token = parse_access_token(r#"{"access_token": "gho_16C7e42F", "scope": "repo"}"#).unwrap();
        assert_eq!(token, "gho_16C7e42F");
    }

    #[test]
    fn test_parse_error_body() {
        let err = parse_access_token(
            "error=bad_verification_code&error_description=The+code+passed+is+incorrect",
        )
        .unwrap_err();
        assert!(matches!(err, Error::OAuth(ref m) if m == "The code passed is incorrect"));

        let err = parse_access_token("scope=repo").unwrap_err();
        assert!(matches!(err, Error::OAuth(_)));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = OAuthConfiguration::new("id", "s3cr3t", ["repo"]);
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("s3cr3t"));
        assert!(rendered.contains("<redacted>"));
    }

    #[tokio::test]
    async fn test_exchange_code_posts_form() {
        let session = Arc::new(MockSession::new());
        session.push(MockResponse::text(200, "access_token=017ec60f4a182&scope=repo&token_type=bearer"));

        let token = config()
            .exchange_code_with(session.clone(), "dhfjgh23493")
            .await
            .unwrap();

        assert_eq!(token.access_token.as_deref(), Some("017ec60f4a182"));
        assert_eq!(token.api_endpoint, "https://api.github.com");

        let call = session.last_call().unwrap();
        assert_eq!(call.method(), &Method::POST);
        assert_eq!(call.url(), "https://github.com/login/oauth/access_token");
        assert_eq!(
            call.header("content-type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(
            call.request.body.as_deref(),
            Some(&b"client_id=client_id&client_secret=client_secret&code=dhfjgh23493"[..])
        );
        assert!(call.header("authorization").is_none());
    }
}
