//! Search resource client.

use std::sync::Arc;

use reqwest::Method;

use crate::error::Error;
use crate::router::{Page, Router};
use crate::transport::HttpTransport;
use crate::types::{CodeSearchResult, Issue, Repository, SearchResponse};

/// Search endpoints. The query uses GitHub's search syntax
/// (`addClass in:file language:js repo:jquery/jquery`).
#[derive(Debug, Clone, Copy)]
pub enum SearchRouter<'a> {
    Code(&'a str, Page),
    Repositories(&'a str, Page),
    Issues(&'a str, Page),
}

impl Router for SearchRouter<'_> {
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        let path = match self {
            Self::Code(..) => "search/code",
            Self::Repositories(..) => "search/repositories",
            Self::Issues(..) => "search/issues",
        };
        path.to_string()
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Code(query, page) | Self::Repositories(query, page) | Self::Issues(query, page) => {
                let mut params = vec![("q", (*query).to_string())];
                page.extend(&mut params);
                params
            }
        }
    }
}

/// Client for the search API.
pub struct SearchClient {
    transport: Arc<HttpTransport>,
}

impl SearchClient {
    /// Create a new search client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Search file contents.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the query is malformed, e.g. code
    /// search without a user, org or repo qualifier.
    pub async fn code(
        &self,
        query: &str,
        page: Page,
    ) -> Result<SearchResponse<CodeSearchResult>, Error> {
        self.transport.load(&SearchRouter::Code(query, page)).await
    }

    pub async fn repositories(
        &self,
        query: &str,
        page: Page,
    ) -> Result<SearchResponse<Repository>, Error> {
        self.transport.load(&SearchRouter::Repositories(query, page)).await
    }

    /// Search issues and pull requests.
    pub async fn issues(&self, query: &str, page: Page) -> Result<SearchResponse<Issue>, Error> {
        self.transport.load(&SearchRouter::Issues(query, page)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params() {
        let route = SearchRouter::Code("addClass repo:jquery/jquery", Page::new(1, 30));
        assert_eq!(route.path(), "search/code");
        assert_eq!(
            route.params(),
            vec![
                ("q", "addClass repo:jquery/jquery".to_string()),
                ("page", "1".to_string()),
                ("per_page", "30".to_string()),
            ]
        );
        assert_eq!(SearchRouter::Issues("is:open", Page::default()).path(), "search/issues");
        assert_eq!(
            SearchRouter::Repositories("tetris", Page::default()).path(),
            "search/repositories"
        );
    }
}
