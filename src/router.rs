//! Declarative endpoint descriptions.
//!
//! Each resource module defines an enum with one variant per endpoint and
//! implements [`Router`] for it. The transport turns a router value into a
//! request; the router itself never touches the network.

use reqwest::Method;
use serde_json::Value;

use crate::error::Error;

/// How a route's parameters travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Parameters go into the URL query string.
    Url,
    /// The body (or the parameters, if there is no body) is sent as JSON.
    Json,
    /// Parameters are sent as an `application/x-www-form-urlencoded` body.
    Form,
}

impl Encoding {
    /// GET and DELETE use the query string; everything else sends JSON.
    #[must_use]
    pub fn for_method(method: &Method) -> Self {
        if *method == Method::GET || *method == Method::DELETE {
            Self::Url
        } else {
            Self::Json
        }
    }
}

/// A single API endpoint.
pub trait Router {
    /// HTTP verb.
    fn method(&self) -> Method;

    /// Path relative to the configured endpoint, without a leading slash.
    fn path(&self) -> String;

    /// Parameter encoding.
    fn encoding(&self) -> Encoding {
        Encoding::for_method(&self.method())
    }

    /// Query or form parameters, in the order they should be sent.
    fn params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// JSON body for [`Encoding::Json`] routes.
    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        Ok(None)
    }
}

/// Pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number
    pub page: u32,
    /// Items per page (GitHub caps this at 100)
    pub per_page: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 100,
        }
    }
}

impl Page {
    #[must_use]
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// The page after this one, same size.
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self
        }
    }

    /// Append `page` and `per_page` to a parameter list.
    pub fn extend(self, params: &mut Vec<(&'static str, String)>) {
        params.push(("page", self.page.to_string()));
        params.push(("per_page", self.per_page.to_string()));
    }

    pub(crate) fn params(self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(2);
        self.extend(&mut params);
        params
    }
}

/// Percent-encode a single path segment (owner, repo, label name, tag...).
#[must_use]
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Encode a git reference, keeping the `/` separators (`heads/feature/x`).
#[must_use]
pub fn encode_reference(reference: &str) -> String {
    reference
        .split('/')
        .map(encode_segment)
        .collect::<Vec<_>>()
        .join("/")
}

/// `repos/{owner}/{repo}` with both parts encoded.
/// Reject a route path containing a `.` or `..` segment.
///
/// URL parsing collapses dot segments (including `%2e` spellings), which
/// would send the request to a different endpoint than the route names.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] naming the offending path.
pub fn check_path(path: &str) -> Result<(), Error> {
    if path.split('/').any(is_dot_segment) {
        return Err(Error::InvalidUrl(format!(
            "{path}: `.` and `..` are not valid path segments"
        )));
    }
    Ok(())
}

fn is_dot_segment(segment: &str) -> bool {
    let segment = segment.to_ascii_lowercase().replace("%2e", ".");
    segment == "." || segment == ".."
}

pub(crate) fn repo_path(owner: &str, repo: &str) -> String {
    format!("repos/{}/{}", encode_segment(owner), encode_segment(repo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_for_method() {
        assert_eq!(Encoding::for_method(&Method::GET), Encoding::Url);
        assert_eq!(Encoding::for_method(&Method::DELETE), Encoding::Url);
        assert_eq!(Encoding::for_method(&Method::POST), Encoding::Json);
        assert_eq!(Encoding::for_method(&Method::PATCH), Encoding::Json);
        assert_eq!(Encoding::for_method(&Method::PUT), Encoding::Json);
    }

    #[test]
    fn test_default_page() {
        let page = Page::default();
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 100);
        assert_eq!(
            page.params(),
            vec![("page", "1".to_string()), ("per_page", "100".to_string())]
        );
    }

    #[test]
    fn test_next_page_keeps_size() {
        assert_eq!(Page::new(2, 30).next(), Page::new(3, 30));
        assert_eq!(Page::new(u32::MAX, 30).next().page, u32::MAX);
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("octocat"), "octocat");
        assert_eq!(encode_segment("help wanted"), "help%20wanted");
        assert_eq!(encode_segment("a/b"), "a%2Fb");
    }

    #[test]
    fn test_check_path_rejects_dot_segments() {
        for path in [
            "repos/octocat/Hello-World/labels/..",
            "repos/octocat/Hello-World/git/refs/../..",
            "gists/.",
            "repos/octocat/Hello-World/releases/tags/%2E%2e",
            "repos/octocat/Hello-World/labels/.%2e/x",
        ] {
            let err = check_path(path).unwrap_err();
            assert!(matches!(err, Error::InvalidUrl(_)), "{path} accepted");
        }
    }

    #[test]
    fn test_check_path_accepts_dots_inside_names() {
        assert!(check_path("repos/octocat/octocat.github.io").is_ok());
        assert!(check_path("repos/octocat/Hello-World/releases/tags/v1.0.0").is_ok());
        assert!(check_path(&format!("gists/{}", encode_segment("..."))).is_ok());
        assert!(check_path(&format!("labels/{}", encode_segment("%2e%2e"))).is_ok());
    }

    #[test]
    fn test_encode_reference_keeps_slashes() {
        assert_eq!(encode_reference("heads/feature/new thing"), "heads/feature/new%20thing");
        assert_eq!(encode_reference("tags/v1.0"), "tags/v1.0");
    }
}
