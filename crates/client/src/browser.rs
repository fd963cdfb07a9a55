//! Browser-automation session manager.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

use toolgate_protocol::{ActionEcho, NavigateResult, SessionInfo};

use crate::error::{ClientError, Result};
use crate::session::{ReplacePolicy, SessionPhase, SessionSlot};
use crate::transport::GatewayTransport;

const FUNCTION: &str = "browser-session";

/// One completed browser operation, oldest-first in the action log.
///
/// The `Display` rendering is the human-readable audit line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionRecord {
	SessionCreated,
	Navigated { url: String, title: String },
	Clicked { selector: String },
	Typed { selector: String, text: String },
	ScreenshotTaken { image_url: Option<String> },
}

impl fmt::Display for ActionRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ActionRecord::SessionCreated => write!(f, "Browser session created"),
			ActionRecord::Navigated { url, .. } => write!(f, "Navigated to: {url}"),
			ActionRecord::Clicked { selector } => write!(f, "Clicked element: {selector}"),
			ActionRecord::Typed { selector, text } => write!(f, "Typed \"{text}\" in: {selector}"),
			ActionRecord::ScreenshotTaken { .. } => write!(f, "Screenshot taken"),
		}
	}
}

/// Owns at most one browser session and serializes calls against it.
///
/// `current_url` and `current_title` always reflect the vendor-echoed
/// values from the last navigation, not the locally-requested ones.
pub struct BrowserManager {
	transport: Arc<dyn GatewayTransport>,
	slot: SessionSlot,
	policy: ReplacePolicy,
	preview_url: Option<String>,
	current_url: Option<String>,
	current_title: Option<String>,
	action_log: Vec<ActionRecord>,
}

impl BrowserManager {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self::with_policy(transport, ReplacePolicy::default())
	}

	pub fn with_policy(transport: Arc<dyn GatewayTransport>, policy: ReplacePolicy) -> Self {
		Self {
			transport,
			slot: SessionSlot::new("browser"),
			policy,
			preview_url: None,
			current_url: None,
			current_title: None,
			action_log: Vec::new(),
		}
	}

	/// Creates a browser session, applying the replace policy when one is
	/// already active. Page state and the action log reset.
	pub async fn create_session(&mut self) -> Result<SessionInfo> {
		if let Some(old) = self.slot.begin_create(self.policy)? {
			debug!(target = "toolgate.session", tool = "browser", session_id = %old, "closing previous session before create");
			self.close_remote(&old).await;
		}

		let value = self.transport.invoke(FUNCTION, json!({ "action": "create" })).await?;
		let info: SessionInfo = serde_json::from_value(value)?;
		self.slot.set_created(info.session_id.clone());
		self.preview_url = info.preview_url.clone();
		self.current_url = None;
		self.current_title = None;
		self.action_log = vec![ActionRecord::SessionCreated];

		debug!(target = "toolgate.session", tool = "browser", session_id = %info.session_id, "session created");
		Ok(info)
	}

	/// Navigates the active session. The vendor-reported URL and title
	/// become the current page state.
	pub async fn navigate(&mut self, url: &str) -> Result<NavigateResult> {
		self.slot.require_active()?;

		let url = url.trim();
		if url.is_empty() {
			return Err(ClientError::InvalidParams("URL cannot be empty".to_string()));
		}

		let session_id = self.slot.begin_action()?;
		let outcome = self
			.transport
			.invoke(
				FUNCTION,
				json!({ "action": "navigate", "sessionId": session_id, "url": url }),
			)
			.await;
		self.slot.finish_action();

		let result: NavigateResult = serde_json::from_value(outcome?)?;
		self.current_url = Some(result.url.clone());
		self.current_title = Some(result.title.clone());
		self.action_log.push(ActionRecord::Navigated {
			url: result.url.clone(),
			title: result.title.clone(),
		});
		Ok(result)
	}

	/// Clicks an element in the active session.
	pub async fn click(&mut self, selector: &str) -> Result<ActionEcho> {
		self.slot.require_active()?;

		let selector = selector.trim();
		if selector.is_empty() {
			return Err(ClientError::InvalidParams("Selector cannot be empty".to_string()));
		}

		let session_id = self.slot.begin_action()?;
		let outcome = self
			.transport
			.invoke(
				FUNCTION,
				json!({ "action": "click", "sessionId": session_id, "selector": selector }),
			)
			.await;
		self.slot.finish_action();

		let echo: ActionEcho = serde_json::from_value(outcome?)?;
		self.action_log.push(ActionRecord::Clicked {
			selector: echo.selector.clone().unwrap_or_else(|| selector.to_string()),
		});
		Ok(echo)
	}

	/// Types text into an element in the active session.
	pub async fn type_text(&mut self, selector: &str, text: &str) -> Result<ActionEcho> {
		self.slot.require_active()?;

		let selector = selector.trim();
		if selector.is_empty() || text.trim().is_empty() {
			return Err(ClientError::InvalidParams("Selector and text cannot be empty".to_string()));
		}

		let session_id = self.slot.begin_action()?;
		let outcome = self
			.transport
			.invoke(
				FUNCTION,
				json!({ "action": "type", "sessionId": session_id, "selector": selector, "text": text }),
			)
			.await;
		self.slot.finish_action();

		let echo: ActionEcho = serde_json::from_value(outcome?)?;
		self.action_log.push(ActionRecord::Typed {
			selector: echo.selector.clone().unwrap_or_else(|| selector.to_string()),
			text: echo.text.clone().unwrap_or_else(|| text.to_string()),
		});
		Ok(echo)
	}

	/// Captures a screenshot of the active session.
	pub async fn screenshot(&mut self) -> Result<ActionEcho> {
		let session_id = self.slot.begin_action()?;
		let outcome = self
			.transport
			.invoke(FUNCTION, json!({ "action": "screenshot", "sessionId": session_id }))
			.await;
		self.slot.finish_action();

		let echo: ActionEcho = serde_json::from_value(outcome?)?;
		self.action_log.push(ActionRecord::ScreenshotTaken {
			image_url: echo.image_url.clone(),
		});
		Ok(echo)
	}

	/// Closes the active session. Never fails: gateway errors are logged and
	/// local state is cleared regardless.
	pub async fn close_session(&mut self) {
		let Some(session_id) = self.slot.close() else { return };
		self.preview_url = None;
		self.current_url = None;
		self.current_title = None;
		self.action_log.clear();
		self.close_remote(&session_id).await;
	}

	async fn close_remote(&self, session_id: &str) {
		if let Err(err) = self
			.transport
			.invoke(FUNCTION, json!({ "action": "close", "sessionId": session_id }))
			.await
		{
			warn!(target = "toolgate.session", tool = "browser", session_id, error = %err, "close failed; local state cleared anyway");
		}
	}

	/// Vendor-reported URL of the current page.
	pub fn current_url(&self) -> Option<&str> {
		self.current_url.as_deref()
	}

	/// Vendor-reported title of the current page.
	pub fn current_title(&self) -> Option<&str> {
		self.current_title.as_deref()
	}

	pub fn preview_url(&self) -> Option<&str> {
		self.preview_url.as_deref()
	}

	/// Completed operations for the current session, oldest first.
	pub fn action_log(&self) -> &[ActionRecord] {
		&self.action_log
	}

	pub fn current_session_id(&self) -> Option<&str> {
		self.slot.session_id()
	}

	pub fn has_active_session(&self) -> bool {
		self.slot.is_active()
	}

	pub fn phase(&self) -> SessionPhase {
		self.slot.phase()
	}
}

impl Drop for BrowserManager {
	fn drop(&mut self) {
		let Some(session_id) = self.slot.close() else { return };
		let Ok(handle) = tokio::runtime::Handle::try_current() else { return };
		let transport = Arc::clone(&self.transport);
		handle.spawn(async move {
			let _ = transport
				.invoke(FUNCTION, json!({ "action": "close", "sessionId": session_id }))
				.await;
		});
	}
}
