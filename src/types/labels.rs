//! Label data models.

use serde::{Deserialize, Serialize};

/// An issue label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: Option<u64>,
    pub node_id: Option<String>,
    pub url: Option<String>,
    pub name: Option<String>,
    /// Six-digit hex color without the leading `#`
    pub color: Option<String>,
    pub description: Option<String>,
    pub default: Option<bool>,
}

/// Body of a create-label request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateLabel {
    pub name: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateLabel {
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_label_deserialize() {
        let json = r#"{"id": 208045946, "name": "bug", "color": "f29513", "default": true}"#;
        let label: Label = serde_json::from_str(json).unwrap();
        assert_eq!(label.name.as_deref(), Some("bug"));
        assert_eq!(label.color.as_deref(), Some("f29513"));
        assert_eq!(label.default, Some(true));
    }

    #[test]
    fn test_create_label_omits_empty_description() {
        let body = serde_json::to_value(CreateLabel::new("bug", "ff0000")).unwrap();
        assert_eq!(body, json!({"name": "bug", "color": "ff0000"}));

        let body = serde_json::to_value(CreateLabel::new("bug", "ff0000").description("Broken")).unwrap();
        assert_eq!(body["description"], "Broken");
    }
}
