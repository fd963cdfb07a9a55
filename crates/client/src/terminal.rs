//! Terminal (sandbox) session manager.

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

use toolgate_protocol::{ExecuteResult, SessionInfo};

use crate::error::{ClientError, Result};
use crate::session::{ReplacePolicy, SessionPhase, SessionSlot};
use crate::transport::GatewayTransport;

const FUNCTION: &str = "terminal-session";

/// One completed command. Records are immutable once produced and appended
/// to [`TerminalManager::history`] oldest-first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRecord {
	pub command: String,
	pub output: String,
	pub error: String,
	pub exit_code: i32,
	pub execution_time_ms: u64,
}

/// Owns at most one sandbox session and serializes calls against it.
pub struct TerminalManager {
	transport: Arc<dyn GatewayTransport>,
	slot: SessionSlot,
	policy: ReplacePolicy,
	history: Vec<CommandRecord>,
}

impl TerminalManager {
	pub fn new(transport: Arc<dyn GatewayTransport>) -> Self {
		Self::with_policy(transport, ReplacePolicy::default())
	}

	pub fn with_policy(transport: Arc<dyn GatewayTransport>, policy: ReplacePolicy) -> Self {
		Self {
			transport,
			slot: SessionSlot::new("terminal"),
			policy,
			history: Vec::new(),
		}
	}

	/// Creates a sandbox session, applying the replace policy when one is
	/// already active. The command history resets for the new session.
	pub async fn create_session(&mut self) -> Result<SessionInfo> {
		if let Some(old) = self.slot.begin_create(self.policy)? {
			debug!(target = "toolgate.session", tool = "terminal", session_id = %old, "closing previous session before create");
			self.close_remote(&old).await;
		}

		let value = self.transport.invoke(FUNCTION, json!({ "action": "create" })).await?;
		let info: SessionInfo = serde_json::from_value(value)?;
		self.slot.set_created(info.session_id.clone());
		self.history.clear();

		debug!(target = "toolgate.session", tool = "terminal", session_id = %info.session_id, "session created");
		Ok(info)
	}

	/// Executes `command` in the active session and appends the record.
	pub async fn execute(&mut self, command: &str) -> Result<CommandRecord> {
		self.slot.require_active()?;

		let command = command.trim();
		if command.is_empty() {
			return Err(ClientError::InvalidParams("Command cannot be empty".to_string()));
		}

		let session_id = self.slot.begin_action()?;
		let outcome = self
			.transport
			.invoke(
				FUNCTION,
				json!({ "action": "execute", "sessionId": session_id, "command": command }),
			)
			.await;
		self.slot.finish_action();

		let wire: ExecuteResult = serde_json::from_value(outcome?)?;
		let record = CommandRecord {
			command: wire.command,
			output: wire.output,
			error: wire.error,
			exit_code: wire.exit_code,
			execution_time_ms: wire.execution_time,
		};
		self.history.push(record.clone());
		Ok(record)
	}

	/// Closes the active session. Never fails: gateway errors are logged and
	/// local state is cleared regardless.
	pub async fn close_session(&mut self) {
		let Some(session_id) = self.slot.close() else { return };
		self.close_remote(&session_id).await;
	}

	async fn close_remote(&self, session_id: &str) {
		if let Err(err) = self
			.transport
			.invoke(FUNCTION, json!({ "action": "close", "sessionId": session_id }))
			.await
		{
			warn!(target = "toolgate.session", tool = "terminal", session_id, error = %err, "close failed; local state cleared anyway");
		}
	}

	/// Completed commands for the current session, oldest first.
	pub fn history(&self) -> &[CommandRecord] {
		&self.history
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

impl Drop for TerminalManager {
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

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use serde_json::json;

	use super::*;
	use crate::error::ErrorKind;
	use crate::testing::FakeGateway;

	fn created(session_id: &str) -> serde_json::Value {
		json!({ "sessionId": session_id, "status": "created" })
	}

	fn executed(command: &str, output: &str) -> serde_json::Value {
		json!({
			"command": command,
			"output": output,
			"error": "",
			"exitCode": 0,
			"executionTime": 12,
		})
	}

	#[tokio::test]
	async fn execute_before_create_fails_without_any_call() {
		let gateway = Arc::new(FakeGateway::new());
		let mut terminal = TerminalManager::new(gateway.clone());

		let err = terminal.execute("pwd").await.unwrap_err();
		assert_eq!(err.kind(), ErrorKind::SessionState);
		assert_eq!(gateway.call_count(), 0);
	}

	#[tokio::test]
	async fn create_then_execute_appends_history_in_order() {
		let gateway = Arc::new(FakeGateway::new());
		gateway.push_ok(created("abc123"));
		gateway.push_ok(executed("pwd", "/workspace"));
		gateway.push_ok(executed("ls", "Cargo.toml"));

		let mut terminal = TerminalManager::new(gateway.clone());
		let session = terminal.create_session().await.unwrap();
		assert_eq!(session.session_id, "abc123");
		assert_eq!(terminal.current_session_id(), Some("abc123"));

		let record = terminal.execute("pwd").await.unwrap();
		assert_eq!(record.command, "pwd");
		assert_eq!(record.output, "/workspace");
		assert_eq!(record.exit_code, 0);
		assert_eq!(record.execution_time_ms, 12);

		terminal.execute("ls").await.unwrap();
		let history: Vec<&str> = terminal.history().iter().map(|r| r.command.as_str()).collect();
		assert_eq!(history, vec!["pwd", "ls"]);
	}

	#[tokio::test]
	async fn empty_command_fails_locally() {
		let gateway = Arc::new(FakeGateway::new());
		gateway.push_ok(created("abc123"));

		let mut terminal = TerminalManager::new(gateway.clone());
		terminal.create_session().await.unwrap();

		let err = terminal.execute("   ").await.unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Validation);
		assert_eq!(gateway.call_count(), 1);
	}

	#[tokio::test]
	async fn close_never_raises_and_clears_state() {
		let gateway = Arc::new(FakeGateway::new());
		gateway.push_ok(created("abc123"));
		gateway.push_err(ClientError::Gateway {
			status: 502,
			message: "vendor is gone".to_string(),
		});

		let mut terminal = TerminalManager::new(gateway.clone());
		terminal.create_session().await.unwrap();

		terminal.close_session().await;
		assert_eq!(terminal.current_session_id(), None);
		assert!(!terminal.has_active_session());
		assert_eq!(terminal.phase(), SessionPhase::Closed);
	}

	#[tokio::test]
	async fn autoclose_policy_closes_the_old_session_first() {
		let gateway = Arc::new(FakeGateway::new());
		gateway.push_ok(created("abc123"));
		gateway.push_ok(json!({ "sessionId": "abc123", "status": "closed" }));
		gateway.push_ok(created("def456"));

		let mut terminal = TerminalManager::new(gateway.clone());
		terminal.create_session().await.unwrap();
		terminal.create_session().await.unwrap();

		assert_eq!(terminal.current_session_id(), Some("def456"));

		let calls = gateway.calls();
		assert_eq!(calls.len(), 3);
		assert_eq!(calls[1].1["action"], "close");
		assert_eq!(calls[1].1["sessionId"], "abc123");
		assert_eq!(calls[2].1["action"], "create");
	}

	#[tokio::test]
	async fn reject_policy_refuses_a_second_create() {
		let gateway = Arc::new(FakeGateway::new());
		gateway.push_ok(created("abc123"));

		let mut terminal = TerminalManager::with_policy(gateway.clone(), ReplacePolicy::Reject);
		terminal.create_session().await.unwrap();

		let err = terminal.create_session().await.unwrap_err();
		assert!(matches!(err, ClientError::SessionActive { .. }));
		assert_eq!(terminal.current_session_id(), Some("abc123"));
		assert_eq!(gateway.call_count(), 1);
	}

	#[test]
	fn drop_without_a_runtime_is_a_noop() {
		let gateway = Arc::new(FakeGateway::new());
		let terminal = TerminalManager::new(gateway);
		drop(terminal);
	}
}
