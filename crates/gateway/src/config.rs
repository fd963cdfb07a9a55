//! Startup-time configuration from the environment.
//!
//! Credentials are resolved exactly once, before the listener binds. A
//! missing credential is fatal here rather than a per-request failure.

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result, bail};

pub const DEFAULT_LISTEN: &str = "127.0.0.1:8787";

/// Credential and endpoint for one vendor API.
#[derive(Debug, Clone)]
pub struct VendorConfig {
	pub api_key: String,
	pub base_url: String,
}

impl VendorConfig {
	fn from_env(key_var: &str, url_var: &str, default_url: &str) -> Result<Self> {
		let api_key = env::var(key_var).with_context(|| format!("{key_var} is not set; refusing to start"))?;
		if api_key.trim().is_empty() {
			bail!("{key_var} is empty; refusing to start");
		}
		let base_url = env::var(url_var).unwrap_or_else(|_| default_url.to_string());
		Ok(Self {
			api_key,
			base_url: base_url.trim_end_matches('/').to_string(),
		})
	}
}

/// Full gateway configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
	pub listen: SocketAddr,
	pub sandbox: VendorConfig,
	pub browser: VendorConfig,
	pub search: VendorConfig,
}

impl GatewayConfig {
	pub fn from_env() -> Result<Self> {
		let listen = env::var("TOOLGATE_LISTEN")
			.unwrap_or_else(|_| DEFAULT_LISTEN.to_string())
			.parse()
			.context("invalid TOOLGATE_LISTEN address")?;

		Ok(Self {
			listen,
			sandbox: VendorConfig::from_env("E2B_API_KEY", "E2B_BASE_URL", "https://api.e2b.dev")?,
			browser: VendorConfig::from_env("HYPERBROWSER_API_KEY", "HYPERBROWSER_BASE_URL", "https://api.hyperbrowser.ai")?,
			search: VendorConfig::from_env("TAVILY_API_KEY", "TAVILY_BASE_URL", "https://api.tavily.com")?,
		})
	}
}
