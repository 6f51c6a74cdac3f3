//! HTTP transport for the octokit client.
//!
//! Turns a [`Router`] into an [`HttpRequest`], hands it to a [`Session`],
//! and resolves the [`HttpResponse`] into a decoded value or an [`Error`].
//! Exactly one request is sent per call; nothing is retried or cached.

use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT,
};
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{Credential, TokenConfiguration};
use crate::error::{Error, GitHubError};
use crate::router::{check_path, Encoding, Router};

/// `User-Agent` sent with every request; GitHub rejects requests without one.
pub const USER_AGENT_VALUE: &str = concat!("octokit.rs/", env!("CARGO_PKG_VERSION"));

/// A fully-formed request, ready for a [`Session`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Header value as a string, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Decoded query string, in order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Body parsed as JSON, if there is one and it parses.
    #[must_use]
    pub fn json_body(&self) -> Option<Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_slice(body).ok())
    }
}

/// What a [`Session`] hands back.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Performs a single HTTP exchange.
///
/// [`ReqwestSession`] is the default. Tests and callers with special
/// networking needs inject their own implementation.
#[async_trait]
pub trait Session: Send + Sync {
    /// Send the request and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when no response could be obtained.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error>;
}

/// [`Session`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestSession {
    client: Client,
}

impl ReqwestSession {
    /// Create a session with reqwest's default client settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, Error> {
        let client = Client::builder().build().map_err(Error::transport)?;
        Ok(Self { client })
    }

    /// Wrap an already configured client (proxies, custom TLS...).
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Session for ReqwestSession {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(Error::transport)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(Error::transport)?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Request pipeline shared by every resource client.
pub struct HttpTransport {
    config: TokenConfiguration,
    session: Arc<dyn Session>,
}

impl HttpTransport {
    /// Create a transport using [`ReqwestSession`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: TokenConfiguration) -> Result<Self, Error> {
        Ok(Self::with_session(config, Arc::new(ReqwestSession::new()?)))
    }

    /// Create a transport around an injected session.
    #[must_use]
    pub fn with_session(config: TokenConfiguration, session: Arc<dyn Session>) -> Self {
        Self { config, session }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &TokenConfiguration {
        &self.config
    }

    /// Get the API endpoint.
    #[must_use]
    pub fn api_endpoint(&self) -> &str {
        &self.config.api_endpoint
    }

    /// Build the request a route describes, without sending it.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL, a header, or the body cannot be built.
    pub fn build_request<R: Router + ?Sized>(&self, route: &R) -> Result<HttpRequest, Error> {
        let method = route.method();
        let mut url = self.url_for(&route.path())?;
        let mut headers = self.default_headers()?;
        let params = route.params();

        let body = match route.encoding() {
            Encoding::Url => {
                if !params.is_empty() {
                    url.query_pairs_mut()
                        .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
                }
                None
            }
            Encoding::Json => {
                let value = match route.body().map_err(|e| Error::Encode(e.to_string()))? {
                    Some(value) => Some(value),
                    None if params.is_empty() => None,
                    None => Some(Value::Object(
                        params
                            .into_iter()
                            .map(|(k, v)| (k.to_string(), Value::String(v)))
                            .collect(),
                    )),
                };
                match value {
                    Some(value) => {
                        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                        Some(serde_json::to_vec(&value).map_err(|e| Error::Encode(e.to_string()))?)
                    }
                    None => None,
                }
            }
            Encoding::Form => {
                headers.insert(
                    CONTENT_TYPE,
                    HeaderValue::from_static("application/x-www-form-urlencoded"),
                );
                let encoded =
                    serde_urlencoded::to_string(&params).map_err(|e| Error::Encode(e.to_string()))?;
                Some(encoded.into_bytes())
            }
        };

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Send a route and decode the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx statuses, [`Error::Decode`] when
    /// the body does not match `T`, and [`Error::Transport`] on network
    /// failures.
    pub async fn load<T: DeserializeOwned, R: Router + ?Sized>(&self, route: &R) -> Result<T, Error> {
        let response = self.execute(route).await?;
        serde_json::from_slice(&response.body).map_err(|e| {
            warn!(error = %e, "Failed to decode response body");
            Error::Decode(e)
        })
    }

    /// Send a route whose response carries no useful body (204 endpoints).
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load), minus decoding.
    pub async fn load_empty<R: Router + ?Sized>(&self, route: &R) -> Result<(), Error> {
        self.execute(route).await.map(|_| ())
    }

    /// Send a route and return the body as text.
    ///
    /// # Errors
    ///
    /// Same as [`load_empty`](Self::load_empty), plus [`Error::Transport`]
    /// when the body is not valid UTF-8.
    pub async fn load_text<R: Router + ?Sized>(&self, route: &R) -> Result<String, Error> {
        let response = self.execute(route).await?;
        String::from_utf8(response.body).map_err(|e| {
            warn!(error = %e, "Response body is not UTF-8");
            Error::transport(e)
        })
    }

    async fn execute<R: Router + ?Sized>(&self, route: &R) -> Result<HttpResponse, Error> {
        let request = self.build_request(route)?;
        debug!(method = %request.method, url = %request.url, "Sending request");

        let response = self.session.send(request).await?;
        debug!(status = response.status.as_u16(), "Received response");

        if response.status.is_success() {
            return Ok(response);
        }

        let error = parse_error_response(&response);
        warn!(
            status = error.status(),
            message = error.message(),
            request_id = error.request_id(),
            "GitHub returned an error"
        );
        Err(Error::Api(error))
    }

    fn url_for(&self, path: &str) -> Result<Url, Error> {
        check_path(path)?;
        let base = self.config.api_endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        let joined = format!("{base}/{path}");
        Url::parse(&joined).map_err(|e| Error::InvalidUrl(format!("{joined}: {e}")))
    }

    fn default_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, header_value(&self.config.accept())?);
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        if let Some(credential) = self.config.credential() {
            let raw = match credential {
                Credential::Bearer(token) => format!("Bearer {token}"),
                Credential::Basic { username, password } => {
                    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
                }
            };
            let mut value = header_value(&raw)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in &self.config.custom_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::Configuration(format!("Invalid header name {name:?}: {e}")))?;
            headers.insert(name, header_value(value)?);
        }

        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::Configuration(format!("Invalid header value: {e}")))
}

/// Map a non-2xx response onto a [`GitHubError`].
fn parse_error_response(response: &HttpResponse) -> GitHubError {
    let status = response.status.as_u16();
    let header = |name: &str| response.headers.get(name).and_then(|v| v.to_str().ok());

    let request_id = header("x-github-request-id").map(String::from);
    let retry_after = header("retry-after").and_then(|s| s.parse::<u32>().ok());
    let rate_limit_exhausted = header("x-ratelimit-remaining") == Some("0");

    let data: Value = serde_json::from_slice(&response.body).unwrap_or(Value::Null);
    let message = data
        .get("message")
        .and_then(Value::as_str)
        .map_or_else(|| format!("HTTP {status}"), String::from);
    let documentation_url = data
        .get("documentation_url")
        .and_then(Value::as_str)
        .map(String::from);

    match response.status {
        StatusCode::UNAUTHORIZED => GitHubError::Authentication {
            status,
            message,
            documentation_url,
            request_id,
        },
        StatusCode::TOO_MANY_REQUESTS => GitHubError::RateLimited {
            status,
            message,
            documentation_url,
            request_id,
            retry_after,
        },
        StatusCode::FORBIDDEN if rate_limit_exhausted => GitHubError::RateLimited {
            status,
            message,
            documentation_url,
            request_id,
            retry_after,
        },
        StatusCode::FORBIDDEN => GitHubError::Forbidden {
            status,
            message,
            documentation_url,
            request_id,
        },
        StatusCode::NOT_FOUND => GitHubError::NotFound {
            status,
            message,
            documentation_url,
            request_id,
        },
        s if s.is_client_error() => GitHubError::Validation {
            status,
            message,
            documentation_url,
            request_id,
        },
        _ => GitHubError::Server {
            status,
            message,
            documentation_url,
            request_id,
        },
    }
}
