//! Web-search integration wire types.

use serde::{Deserialize, Serialize};

fn default_max_results() -> u32 {
    5
}

/// Request body for `/web-search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Query text; validated non-empty by the gateway.
    #[serde(default)]
    pub query: Option<String>,

    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

/// One search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

/// Atomic response to one search call.
///
/// `results` is always present - `[]` when the call failed - and each
/// response replaces the previous one rather than merging into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,

    #[serde(default)]
    pub results: Vec<SearchResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,

    #[serde(default)]
    pub total_results: usize,

    /// Failure message when `results` is the empty fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_results_defaults_to_five() {
        let request: SearchRequest = serde_json::from_str(r#"{"query":"rust"}"#).unwrap();
        assert_eq!(request.max_results, 5);
    }

    #[test]
    fn response_defaults_results_to_empty() {
        let response: SearchResponse = serde_json::from_str(r#"{"query":"rust"}"#).unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.total_results, 0);
        assert!(response.error.is_none());
    }
}
