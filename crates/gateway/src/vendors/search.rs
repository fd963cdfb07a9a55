//! Web-search vendor (stateless, no session lifecycle).

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::config::VendorConfig;
use crate::error::Result;
use crate::vendors::expect_success;

/// Vendor search response subset.
#[derive(Debug, Deserialize)]
struct VendorSearchResponse {
	#[serde(default)]
	results: Vec<VendorSearchRow>,
	#[serde(default)]
	answer: Option<String>,
}

/// One vendor result row. `content` becomes the normalized `snippet`.
#[derive(Debug, Deserialize)]
struct VendorSearchRow {
	#[serde(default)]
	title: Option<String>,
	#[serde(default)]
	url: Option<String>,
	#[serde(default)]
	content: Option<String>,
	#[serde(default)]
	published_date: Option<String>,
}

pub struct SearchVendor {
	http: Client,
	config: VendorConfig,
}

impl SearchVendor {
	pub fn new(http: Client, config: VendorConfig) -> Self {
		Self { http, config }
	}

	/// Runs one search and normalizes the vendor rows.
	pub async fn search(&self, query: &str, max_results: u32) -> Result<Value> {
		let response = self
			.http
			.post(format!("{}/search", self.config.base_url))
			.bearer_auth(&self.config.api_key)
			.json(&json!({
				"query": query,
				"search_depth": "basic",
				"include_answer": true,
				"include_images": false,
				"include_raw_content": false,
				"max_results": max_results,
			}))
			.send()
			.await?;
		let response = expect_success(response, "Search API error").await?;
		let vendor: VendorSearchResponse = response.json().await?;

		let results: Vec<Value> = vendor
			.results
			.into_iter()
			.map(|row| {
				json!({
					"title": row.title.unwrap_or_default(),
					"url": row.url.unwrap_or_default(),
					"snippet": row.content.unwrap_or_default(),
					"publishedDate": row.published_date,
				})
			})
			.collect();
		let total_results = results.len();

		info!(target = "toolgate.gateway", query, results = total_results, "search completed");

		Ok(json!({
			"query": query,
			"results": results,
			"answer": vendor.answer,
			"totalResults": total_results,
		}))
	}
}
