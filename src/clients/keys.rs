//! Public SSH keys of the authenticated user.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::error::Error;
use crate::router::{Page, Router};
use crate::transport::HttpTransport;
use crate::types::{CreatePublicKey, PublicKey};

#[derive(Debug, Clone, Copy)]
pub enum PublicKeyRouter<'a> {
    ListMine(Page),
    Create(&'a CreatePublicKey),
}

impl Router for PublicKeyRouter<'_> {
    fn method(&self) -> Method {
        match self {
            Self::ListMine(_) => Method::GET,
            Self::Create(_) => Method::POST,
        }
    }

    fn path(&self) -> String {
        "user/keys".to_string()
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::ListMine(page) => page.params(),
            Self::Create(_) => Vec::new(),
        }
    }

    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        match self {
            Self::Create(key) => serde_json::to_value(key).map(Some),
            Self::ListMine(_) => Ok(None),
        }
    }
}

/// Client for SSH key management.
pub struct KeysClient {
    transport: Arc<HttpTransport>,
}

impl KeysClient {
    /// Create a new keys client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn list_mine(&self, page: Page) -> Result<Vec<PublicKey>, Error> {
        self.transport.load(&PublicKeyRouter::ListMine(page)).await
    }

    /// Register a new SSH key.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the key is malformed or already in
    /// use on any account.
    pub async fn create(&self, key: &CreatePublicKey) -> Result<PublicKey, Error> {
        self.transport.load(&PublicKeyRouter::Create(key)).await
    }
}
