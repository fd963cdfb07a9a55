//! Generic action dispatch over a per-vendor adapter table.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{info, warn};

use toolgate_protocol::{GatewayAction, GatewayRequest};

use crate::error::{GatewayError, Result};

/// Wire parameter a sessionful action can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
	SessionId,
	Command,
	Url,
	Selector,
	Text,
}

impl Param {
	fn wire_name(self) -> &'static str {
		match self {
			Param::SessionId => "sessionId",
			Param::Command => "command",
			Param::Url => "url",
			Param::Selector => "selector",
			Param::Text => "text",
		}
	}

	fn get(self, request: &GatewayRequest) -> Option<&str> {
		match self {
			Param::SessionId => request.session_id.as_deref(),
			Param::Command => request.command.as_deref(),
			Param::Url => request.url.as_deref(),
			Param::Selector => request.selector.as_deref(),
			Param::Text => request.text.as_deref(),
		}
	}
}

/// Table row: one supported action and the parameters it requires.
pub type ActionSpec = (GatewayAction, &'static [Param]);

/// A sessionful vendor behind one gateway endpoint.
///
/// Implementations translate validated requests into vendor REST calls and
/// return the normalized response body. Parameter validation happens in
/// [`dispatch`], driven by the adapter's action table.
#[async_trait]
pub trait SessionVendor: Send + Sync {
	/// Integration name used in logs.
	fn name(&self) -> &'static str;

	/// Supported actions and their required parameters.
	fn actions(&self) -> &'static [ActionSpec];

	async fn create(&self) -> Result<Value>;

	async fn act(&self, action: GatewayAction, request: &GatewayRequest) -> Result<Value>;

	async fn close(&self, session_id: &str) -> Result<()>;
}

/// Validates `request` against the adapter table and routes it.
///
/// Close never propagates vendor failure: the acknowledgement is returned
/// regardless, so callers can always clear local state even when the remote
/// side is already gone.
pub async fn dispatch<V: SessionVendor + ?Sized>(vendor: &V, request: &GatewayRequest) -> Result<Value> {
	let Some((_, required)) = vendor.actions().iter().find(|(action, _)| *action == request.action) else {
		return Err(GatewayError::UnknownAction(request.action.to_string()));
	};

	for param in *required {
		match param.get(request) {
			Some(value) if !value.trim().is_empty() => {}
			_ => {
				return Err(GatewayError::MissingParam {
					action: request.action.to_string(),
					param: param.wire_name(),
				});
			}
		}
	}

	info!(
		target = "toolgate.gateway",
		vendor = vendor.name(),
		action = %request.action,
		session_id = ?request.session_id,
		"dispatch"
	);

	match request.action {
		GatewayAction::Create => vendor.create().await,
		GatewayAction::Close => {
			let session_id = request.session_id.as_deref().unwrap_or_default();
			if let Err(err) = vendor.close(session_id).await {
				warn!(
					target = "toolgate.gateway",
					vendor = vendor.name(),
					session_id,
					error = %err,
					"close failed; reporting closed anyway"
				);
			}
			Ok(json!({ "sessionId": session_id, "status": "closed" }))
		}
		_ => vendor.act(request.action, request).await,
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;

	struct EchoVendor {
		calls: AtomicUsize,
		fail_close: bool,
	}

	impl EchoVendor {
		fn new(fail_close: bool) -> Self {
			Self {
				calls: AtomicUsize::new(0),
				fail_close,
			}
		}
	}

	#[async_trait]
	impl SessionVendor for EchoVendor {
		fn name(&self) -> &'static str {
			"echo"
		}

		fn actions(&self) -> &'static [ActionSpec] {
			&[
				(GatewayAction::Create, &[]),
				(GatewayAction::Execute, &[Param::SessionId, Param::Command]),
				(GatewayAction::Close, &[Param::SessionId]),
			]
		}

		async fn create(&self) -> Result<Value> {
			self.calls.fetch_add(1, Ordering::SeqCst);
			Ok(json!({ "sessionId": "abc123", "status": "created" }))
		}

		async fn act(&self, _action: GatewayAction, request: &GatewayRequest) -> Result<Value> {
			self.calls.fetch_add(1, Ordering::SeqCst);
			Ok(json!({ "command": request.command }))
		}

		async fn close(&self, _session_id: &str) -> Result<()> {
			self.calls.fetch_add(1, Ordering::SeqCst);
			if self.fail_close {
				return Err(GatewayError::Vendor {
					status: 500,
					message: "session already gone".to_string(),
				});
			}
			Ok(())
		}
	}

	fn request(action: GatewayAction) -> GatewayRequest {
		GatewayRequest {
			action,
			session_id: None,
			command: None,
			url: None,
			selector: None,
			text: None,
		}
	}

	#[tokio::test]
	async fn missing_param_fails_before_vendor_call() {
		let vendor = EchoVendor::new(false);
		let err = dispatch(&vendor, &request(GatewayAction::Execute)).await.unwrap_err();
		assert!(matches!(err, GatewayError::MissingParam { param: "sessionId", .. }));
		assert_eq!(vendor.calls.load(Ordering::SeqCst), 0);
	}

	#[tokio::test]
	async fn whitespace_param_is_treated_as_missing() {
		let vendor = EchoVendor::new(false);
		let mut req = request(GatewayAction::Execute);
		req.session_id = Some("abc123".to_string());
		req.command = Some("   ".to_string());
		let err = dispatch(&vendor, &req).await.unwrap_err();
		assert!(matches!(err, GatewayError::MissingParam { param: "command", .. }));
		assert_eq!(vendor.calls.load(Ordering::SeqCst), 0);
	}

	#[tokio::test]
	async fn unsupported_action_is_rejected() {
		let vendor = EchoVendor::new(false);
		let err = dispatch(&vendor, &request(GatewayAction::Navigate)).await.unwrap_err();
		assert!(matches!(err, GatewayError::UnknownAction(_)));
		assert_eq!(vendor.calls.load(Ordering::SeqCst), 0);
	}

	#[tokio::test]
	async fn close_swallows_vendor_failure() {
		let vendor = EchoVendor::new(true);
		let mut req = request(GatewayAction::Close);
		req.session_id = Some("abc123".to_string());
		let body = dispatch(&vendor, &req).await.unwrap();
		assert_eq!(body["sessionId"], "abc123");
		assert_eq!(body["status"], "closed");
		assert_eq!(vendor.calls.load(Ordering::SeqCst), 1);
	}
}
