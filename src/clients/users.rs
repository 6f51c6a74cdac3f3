//! Users resource client.

use std::sync::Arc;

use reqwest::Method;

use crate::error::Error;
use crate::router::{encode_segment, Router};
use crate::transport::HttpTransport;
use crate::types::User;

/// User endpoints.
#[derive(Debug, Clone, Copy)]
pub enum UserRouter<'a> {
    /// `GET /user`
    Me,
    /// `GET /users/{name}`
    Get(&'a str),
}

impl Router for UserRouter<'_> {
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        match self {
            Self::Me => "user".to_string(),
            Self::Get(name) => format!("users/{}", encode_segment(name)),
        }
    }
}

/// Client for user lookups.
pub struct UsersClient {
    transport: Arc<HttpTransport>,
}

impl UsersClient {
    /// Create a new users client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Fetch the authenticated user, including private profile fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] with an authentication error when no valid
    /// token is configured.
    pub async fn me(&self) -> Result<User, Error> {
        self.transport.load(&UserRouter::Me).await
    }

    /// Fetch a user by login.
    ///
    /// # Arguments
    ///
    /// * `name` - The user's login
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no such user exists.
    pub async fn get(&self, name: &str) -> Result<User, Error> {
        self.transport.load(&UserRouter::Get(name)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Encoding;

    #[test]
    fn test_routes() {
        assert_eq!(UserRouter::Me.path(), "user");
        assert_eq!(UserRouter::Get("octocat").path(), "users/octocat");
        assert_eq!(UserRouter::Get("octocat").method(), Method::GET);
        assert_eq!(UserRouter::Me.encoding(), Encoding::Url);
        assert!(UserRouter::Me.params().is_empty());
    }
}
