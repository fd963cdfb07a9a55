//! Vendor adapters behind the gateway endpoints.

mod browser;
mod sandbox;
mod search;

pub use browser::BrowserVendor;
pub use sandbox::SandboxVendor;
pub use search::SearchVendor;

use tracing::error;

use crate::error::{GatewayError, Result};

/// Turns a non-success vendor response into a [`GatewayError::Vendor`].
///
/// The vendor body is logged, not forwarded; callers see `{what}: {status}`.
pub(crate) async fn expect_success(response: reqwest::Response, what: &str) -> Result<reqwest::Response> {
	let status = response.status();
	if status.is_success() {
		return Ok(response);
	}

	let body = response.text().await.unwrap_or_default();
	error!(target = "toolgate.gateway", status = status.as_u16(), body, "{what}");

	Err(GatewayError::Vendor {
		status: status.as_u16(),
		message: format!("{what}: {}", status.as_u16()),
	})
}
