//! Stateless web-search client.

use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use toolgate_protocol::SearchResponse;

use crate::error::{ClientError, Result};
use crate::transport::GatewayTransport;

const FUNCTION: &str = "web-search";

/// One-shot search calls against the gateway.
///
/// Search has no session lifecycle; each response replaces the previous one.
pub struct SearchClient {
	transport: Arc<dyn GatewayTransport>,
	last: Option<SearchResponse>,
}

impl SearchClient {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self { transport, last: None }
	}

	/// Runs one search. An empty query fails locally with zero network
	/// calls; a gateway or vendor failure resolves to an empty result set
	/// with the failure message recorded on the response.
	pub async fn search(&mut self, query: &str, max_results: u32) -> Result<SearchResponse> {
		let query = query.trim();
		if query.is_empty() {
			return Err(ClientError::InvalidParams("Search query cannot be empty".to_string()));
		}

		let response = match self
			.transport
			.invoke(FUNCTION, json!({ "query": query, "maxResults": max_results }))
			.await
		{
			Ok(value) => serde_json::from_value(value)?,
			Err(err @ (ClientError::Gateway { .. } | ClientError::Transport(_))) => {
				warn!(target = "toolgate.session", tool = "search", error = %err, "search failed; returning empty result set");
				SearchResponse {
					query: query.to_string(),
					results: Vec::new(),
					answer: None,
					total_results: 0,
					error: Some(err.to_string()),
				}
			}
			Err(err) => return Err(err),
		};

		self.last = Some(response.clone());
		Ok(response)
	}

	/// Most recent response, if any.
	pub fn last_response(&self) -> Option<&SearchResponse> {
		self.last.as_ref()
	}
}
