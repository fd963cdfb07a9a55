//! Sandboxed code-execution vendor (terminal sessions).

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
struct CreatedSandbox {
	session_id: String,
}

/// Vendor command-execution response subset. Every field is optional on the
/// wire; normalization fills the gaps with empty/zero values.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ExecutedCommand {
	#[serde(default)]
	stdout: Option<String>,
	#[serde(default)]
	stderr: Option<String>,
	#[serde(default)]
	exit_code: Option<i32>,
	#[serde(default)]
	execution_time_ms: Option<u64>,
}

const ACTIONS: &[ActionSpec] = &[
	(GatewayAction::Create, &[]),
	(GatewayAction::Execute, &[Param::SessionId, Param::Command]),
	(GatewayAction::Close, &[Param::SessionId]),
];

pub struct SandboxVendor {
	http: Client,
	config: VendorConfig,
}

impl SandboxVendor {
	pub fn new(http: Client, config: VendorConfig) -> Self {
		Self { http, config }
	}
}

#[async_trait]
impl SessionVendor for SandboxVendor {
	fn name(&self) -> &'static str {
		"sandbox"
	}

	fn actions(&self) -> &'static [ActionSpec] {
		ACTIONS
	}

	async fn create(&self) -> Result<Value> {
		let response = self
			.http
			.post(format!("{}/sessions", self.config.base_url))
			.bearer_auth(&self.config.api_key)
			.json(&json!({ "template": "base" }))
			.send()
			.await?;
		let response = expect_success(response, "Failed to create sandbox session").await?;
		let created: CreatedSandbox = response.json().await?;

		info!(target = "toolgate.gateway", session_id = %created.session_id, "sandbox session created");

		Ok(json!({ "sessionId": created.session_id, "status": "created" }))
	}

	async fn act(&self, action: GatewayAction, request: &GatewayRequest) -> Result<Value> {
		match action {
			GatewayAction::Execute => {
				let session_id = request.session_id.as_deref().unwrap_or_default();
				let command = request.command.as_deref().unwrap_or_default();

				let response = self
					.http
					.post(format!("{}/sessions/{}/terminal", self.config.base_url, session_id))
					.bearer_auth(&self.config.api_key)
					.json(&json!({ "command": command }))
					.send()
					.await?;
				let response = expect_success(response, "Failed to execute command").await?;
				let executed: ExecutedCommand = response.json().await?;

				info!(
					target = "toolgate.gateway",
					exit_code = executed.exit_code.unwrap_or(0),
					"sandbox command executed"
				);

				Ok(json!({
					"command": command,
					"output": executed.stdout.unwrap_or_default(),
					"error": executed.stderr.unwrap_or_default(),
					"exitCode": executed.exit_code.unwrap_or(0),
					"executionTime": executed.execution_time_ms.unwrap_or(0),
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
		expect_success(response, "Failed to close sandbox session").await?;
		Ok(())
	}
}
