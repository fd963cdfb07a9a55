//! Transport seam between session managers and the gateway.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use toolgate_protocol::FailureBody;

use crate::error::{ClientError, Result};

/// Invokes named gateway functions with a JSON body.
///
/// Managers depend on this seam rather than on HTTP directly, so tests can
/// substitute a recording fake and embedders can add their own auth layer.
#[async_trait]
pub trait GatewayTransport: Send + Sync {
	async fn invoke(&self, function: &str, body: Value) -> Result<Value>;
}

/// HTTP transport talking to a running gateway.
#[derive(Debug)]
pub struct HttpTransport {
	base: Url,
	http: reqwest::Client,
}

impl HttpTransport {
	pub fn new(base_url: &str) -> Result<Self> {
		let base = Url::parse(base_url).map_err(|e| ClientError::Config(format!("invalid gateway URL {base_url}: {e}")))?;
		Ok(Self {
			base,
			http: reqwest::Client::new(),
		})
	}
}

#[async_trait]
impl GatewayTransport for HttpTransport {
	async fn invoke(&self, function: &str, body: Value) -> Result<Value> {
		let url = self
			.base
			.join(function)
			.map_err(|e| ClientError::Config(format!("invalid gateway function {function}: {e}")))?;

		let response = self.http.post(url).json(&body).send().await?;
		let status = response.status();
		if status.is_success() {
			return Ok(response.json().await?);
		}

		let message = match response.json::<FailureBody>().await {
			Ok(failure) => failure.error,
			Err(_) => format!("gateway returned {status}"),
		};

		Err(ClientError::Gateway {
			status: status.as_u16(),
			message,
		})
	}
}
