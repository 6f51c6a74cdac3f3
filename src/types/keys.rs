//! Public SSH key data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A public SSH key registered on the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    pub id: u64,
    /// The key material, e.g. `ssh-rsa AAAA...`
    pub key: String,
    pub title: Option<String>,
    pub url: Option<String>,
    pub verified: Option<bool>,
    pub read_only: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of an add-key request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePublicKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub key: String,
}

impl CreatePublicKey {
    #[must_use]
    pub fn new(title: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            key: key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_key_deserialize() {
        let json = r#"{"key": "ssh-rsa AAAAB3NzaC1yc2EAAA", "id": 2, "title": "laptop",
                       "verified": true, "read_only": false, "created_at": "2020-06-11T21:31:57Z"}"#;
        let key: PublicKey = serde_json::from_str(json).unwrap();
        assert_eq!(key.id, 2);
        assert_eq!(key.title.as_deref(), Some("laptop"));
        assert_eq!(key.verified, Some(true));
    }
}
