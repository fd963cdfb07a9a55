//! Browser-automation vendor (remote browser sessions).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use toolgate_protocol::{GatewayAction, GatewayRequest};

use crate::config::VendorConfig;
use crate::dispatch::{ActionSpec, Param, SessionVendor};
use crate::error::{GatewayError, Result};
use crate::vendors::expect_success;

/// Vendor session-create response subset.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedBrowser {
	session_id: String,
	#[serde(default)]
	preview_url: Option<String>,
}

/// Vendor navigation response subset. The echoed `url` is authoritative;
/// the requested URL is only a fallback.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct NavigatedPage {
	#[serde(default)]
	url: Option<String>,
	#[serde(default)]
	title: Option<String>,
}

/// Vendor screenshot response subset.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct CapturedScreenshot {
	#[serde(default)]
	image_url: Option<String>,
}

const ACTIONS: &[ActionSpec] = &[
	(GatewayAction::Create, &[]),
	(GatewayAction::Navigate, &[Param::SessionId, Param::Url]),
	(GatewayAction::Click, &[Param::SessionId, Param::Selector]),
	(GatewayAction::Type, &[Param::SessionId, Param::Selector, Param::Text]),
	(GatewayAction::Screenshot, &[Param::SessionId]),
	(GatewayAction::Close, &[Param::SessionId]),
];

pub struct BrowserVendor {
	http: Client,
	config: VendorConfig,
}

impl BrowserVendor {
	pub fn new(http: Client, config: VendorConfig) -> Self {
		Self { http, config }
	}

	fn session_url(&self, session_id: &str, path: &str) -> String {
		format!("{}/sessions/{}{}", self.config.base_url, session_id, path)
	}
}

#[async_trait]
impl SessionVendor for BrowserVendor {
	fn name(&self) -> &'static str {
		"browser"
	}

	fn actions(&self) -> &'static [ActionSpec] {
		ACTIONS
	}

	async fn create(&self) -> Result<Value> {
		let response = self
			.http
			.post(format!("{}/sessions", self.config.base_url))
			.bearer_auth(&self.config.api_key)
			.json(&json!({
				"browserType": "chromium",
				"viewport": { "width": 1280, "height": 720 },
				"headless": false,
			}))
			.send()
			.await?;
		let response = expect_success(response, "Failed to create browser session").await?;
		let created: CreatedBrowser = response.json().await?;

		info!(target = "toolgate.gateway", session_id = %created.session_id, "browser session created");

		Ok(json!({
			"sessionId": created.session_id,
			"status": "created",
			"previewUrl": created.preview_url,
		}))
	}

	async fn act(&self, action: GatewayAction, request: &GatewayRequest) -> Result<Value> {
		let session_id = request.session_id.as_deref().unwrap_or_default();

		match action {
			GatewayAction::Navigate => {
				let url = request.url.as_deref().unwrap_or_default();
				let response = self
					.http
					.post(self.session_url(session_id, "/navigate"))
					.bearer_auth(&self.config.api_key)
					.json(&json!({ "url": url }))
					.send()
					.await?;
				let response = expect_success(response, "Failed to navigate").await?;
				let page: NavigatedPage = response.json().await?;

				Ok(json!({
					"url": page.url.unwrap_or_else(|| url.to_string()),
					"title": page.title.unwrap_or_default(),
					"status": "navigated",
				}))
			}
			GatewayAction::Click => {
				let selector = request.selector.as_deref().unwrap_or_default();
				let response = self
					.http
					.post(self.session_url(session_id, "/click"))
					.bearer_auth(&self.config.api_key)
					.json(&json!({ "selector": selector }))
					.send()
					.await?;
				expect_success(response, "Failed to click element").await?;

				Ok(json!({
					"action": "click",
					"selector": selector,
					"status": "completed",
				}))
			}
			GatewayAction::Type => {
				let selector = request.selector.as_deref().unwrap_or_default();
				let text = request.text.as_deref().unwrap_or_default();
				let response = self
					.http
					.post(self.session_url(session_id, "/type"))
					.bearer_auth(&self.config.api_key)
					.json(&json!({ "selector": selector, "text": text }))
					.send()
					.await?;
				expect_success(response, "Failed to type text").await?;

				Ok(json!({
					"action": "type",
					"selector": selector,
					"text": text,
					"status": "completed",
				}))
			}
			GatewayAction::Screenshot => {
				let response = self
					.http
					.post(self.session_url(session_id, "/screenshot"))
					.bearer_auth(&self.config.api_key)
					.send()
					.await?;
				let response = expect_success(response, "Failed to take screenshot").await?;
				let captured: CapturedScreenshot = response.json().await?;

				Ok(json!({
					"action": "screenshot",
					"imageUrl": captured.image_url,
					"status": "completed",
				}))
			}
			other => Err(GatewayError::UnknownAction(other.to_string())),
		}
	}

	async fn close(&self, session_id: &str) -> Result<()> {
		let response = self
			.http
			.delete(format!("{}/sessions/{}", self.config.base_url, session_id))
			.bearer_auth(&self.config.api_key)
			.send()
			.await?;
		expect_success(response, "Failed to close browser session").await?;
		Ok(())
	}
}
