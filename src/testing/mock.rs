//! Mock session for testing.
//!
//! `MockSession` implements [`Session`] without touching the network: it
//! records every request it receives and answers with queued responses in
//! FIFO order.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::error::Error;
use crate::transport::{HttpRequest, HttpResponse, Session};

/// Record of a request the mock received.
#[derive(Debug, Clone)]
pub struct MockCall {
    /// The request as the transport built it
    pub request: HttpRequest,
    /// When the request arrived
    pub timestamp: DateTime<Utc>,
}

impl MockCall {
    /// Create a new mock call record.
    #[must_use]
    pub fn new(request: HttpRequest) -> Self {
        Self {
            request,
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.request.method
    }

    /// Full request URL.
    #[must_use]
    pub fn url(&self) -> &str {
        self.request.url.as_str()
    }

    /// URL path, starting with `/`.
    #[must_use]
    pub fn path(&self) -> &str {
        self.request.url.path()
    }

    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.request.query_pairs()
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.request.header(name)
    }

    #[must_use]
    pub fn json_body(&self) -> Option<Value> {
        self.request.json_body()
    }
}

/// A canned response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Vec<(String, String)>,
    /// Raw body
    pub body: Vec<u8>,
}

impl MockResponse {
    /// A JSON response.
    #[must_use]
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: body.as_bytes().to_vec(),
        }
    }

    /// A plain-text response.
    #[must_use]
    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            headers: vec![("Content-Type".to_string(), "text/plain".to_string())],
            body: body.as_bytes().to_vec(),
        }
    }

    /// A response without a body (204 No Content and friends).
    #[must_use]
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Add a response header.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    fn into_response(self) -> Result<HttpResponse, Error> {
        let status = StatusCode::from_u16(self.status)
            .map_err(|e| Error::Configuration(format!("Invalid mock status: {e}")))?;

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::Configuration(format!("Invalid mock header: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::Configuration(format!("Invalid mock header: {e}")))?;
            headers.append(name, value);
        }
        if !headers.contains_key(CONTENT_TYPE) && !self.body.is_empty() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        Ok(HttpResponse {
            status,
            headers,
            body: self.body,
        })
    }
}

#[derive(Debug)]
enum Queued {
    Response(MockResponse),
    Failure(String),
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct MockTransportError(String);

/// Internal state for the mock session.
#[derive(Debug, Default)]
struct MockSessionState {
    queue: VecDeque<Queued>,
    calls: Vec<MockCall>,
}

/// Recording [`Session`] that replays queued responses.
///
/// When the queue is empty the session answers `404` with GitHub's usual
/// `{"message": "Not Found"}` body.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use octokit::testing::{MockResponse, MockSession};
/// use octokit::{Octokit, TokenConfiguration};
///
/// let session = Arc::new(MockSession::new());
/// session.push(MockResponse::json(200, r#"{"login": "octocat", "id": 1}"#));
/// let client = Octokit::with_session(TokenConfiguration::new(Some("token")), session.clone());
/// ```
#[derive(Debug, Default)]
pub struct MockSession {
    state: Mutex<MockSessionState>,
}

impl MockSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn push(&self, response: MockResponse) {
        self.lock().queue.push_back(Queued::Response(response));
    }

    /// Queue a transport failure with the given message.
    pub fn push_failure(&self, message: &str) {
        self.lock().queue.push_back(Queued::Failure(message.to_string()));
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn respond_with(self, response: MockResponse) -> Self {
        self.push(response);
        self
    }

    /// All recorded calls, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<MockCall> {
        self.lock().calls.clone()
    }

    /// The most recent call.
    #[must_use]
    pub fn last_call(&self) -> Option<MockCall> {
        self.lock().calls.last().cloned()
    }

    /// Number of requests received.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    /// Check if a request was made to the given path (e.g. `/user`).
    #[must_use]
    pub fn was_called(&self, path: &str) -> bool {
        self.lock().calls.iter().any(|call| call.path() == path)
    }

    /// Clear recorded calls and queued responses.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.calls.clear();
        state.queue.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockSessionState> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl Session for MockSession {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let next = {
            let mut state = self.lock();
            state.calls.push(MockCall::new(request));
            state.queue.pop_front()
        };

        match next {
            Some(Queued::Response(response)) => response.into_response(),
            Some(Queued::Failure(message)) => Err(Error::transport(MockTransportError(message))),
            None => MockResponse::json(404, r#"{"message": "Not Found"}"#).into_response(),
        }
    }
}
