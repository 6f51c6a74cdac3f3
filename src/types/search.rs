//! Search result envelopes.

use serde::{Deserialize, Serialize};

use super::repos::Repository;

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse<T> {
    /// Total matches across all pages
    #[serde(default)]
    pub total_count: u64,
    /// GitHub gave up before finding every match
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// A file matched by code search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeSearchResult {
    pub name: String,
    pub path: String,
    pub sha: Option<String>,
    pub url: Option<String>,
    pub git_url: Option<String>,
    pub html_url: Option<String>,
    pub repository: Option<Repository>,
    pub score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Issue;

    #[test]
    fn test_code_search_deserialize() {
        let json = r#"{
            "total_count": 7,
            "incomplete_results": false,
            "items": [{
                "name": "classes.js",
                "path": "src/attributes/classes.js",
                "sha": "d7212f9dee2dcc18f084d7df8f417b80846ded5a",
                "repository": {"id": 167174, "name": "jquery", "full_name": "jquery/jquery"},
                "score": 1.0
            }]
        }"#;

        let result: SearchResponse<CodeSearchResult> = serde_json::from_str(json).unwrap();
        assert_eq!(result.total_count, 7);
        assert!(!result.incomplete_results);
        assert_eq!(result.items[0].path, "src/attributes/classes.js");
    }

    #[test]
    fn test_issue_search_deserialize() {
        let json = r#"{"total_count": 1, "incomplete_results": true,
                       "items": [{"id": 1, "number": 5, "title": "Bug"}]}"#;
        let result: SearchResponse<Issue> = serde_json::from_str(json).unwrap();
        assert!(result.incomplete_results);
        assert_eq!(result.items[0].number, 5);
    }
}
