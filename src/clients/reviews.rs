//! Pull request reviews.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::error::Error;
use crate::router::{repo_path, Router};
use crate::transport::HttpTransport;
use crate::types::{CreateReview, Review};

/// Review endpoints.
#[derive(Debug, Clone, Copy)]
pub enum ReviewRouter<'a> {
    List(&'a str, &'a str, u64),
    Create(&'a str, &'a str, u64, &'a CreateReview),
}

impl Router for ReviewRouter<'_> {
    fn method(&self) -> Method {
        match self {
            Self::List(..) => Method::GET,
            Self::Create(..) => Method::POST,
        }
    }

    fn path(&self) -> String {
        match self {
            Self::List(owner, repo, number) | Self::Create(owner, repo, number, _) => {
                format!("{}/pulls/{number}/reviews", repo_path(owner, repo))
            }
        }
    }

    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        match self {
            Self::Create(.., review) => serde_json::to_value(review).map(Some),
            Self::List(..) => Ok(None),
        }
    }
}

/// Client for pull request reviews.
pub struct ReviewsClient {
    transport: Arc<HttpTransport>,
}

impl ReviewsClient {
    /// Create a new reviews client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List reviews on a pull request, oldest first.
    pub async fn list(&self, owner: &str, repo: &str, number: u64) -> Result<Vec<Review>, Error> {
        self.transport.load(&ReviewRouter::List(owner, repo, number)).await
    }

    /// Create a review, optionally with inline comments.
    ///
    /// # Arguments
    ///
    /// * `number` - Pull request number
    /// * `review` - Review body; without an event the review stays pending
    ///
    /// # Errors
    ///
    /// Returns a validation error when reviewing your own pull request or
    /// when a comment points outside the diff.
    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        review: &CreateReview,
    ) -> Result<Review, Error> {
        self.transport
            .load(&ReviewRouter::Create(owner, repo, number, review))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReviewEvent;

    #[test]
    fn test_routes() {
        assert_eq!(ReviewRouter::List("o", "r", 12).path(), "repos/o/r/pulls/12/reviews");

        let review = CreateReview::new(ReviewEvent::Approve);
        let route = ReviewRouter::Create("o", "r", 12, &review);
        assert_eq!(route.method(), Method::POST);
        assert_eq!(route.body().unwrap(), Some(serde_json::json!({"event": "APPROVE"})));
    }
}
