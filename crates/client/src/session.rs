//! Session lifecycle primitives shared by the managers.

use serde::Serialize;

use crate::error::{ClientError, Result};

/// Lifecycle phase of the locally-owned session slot.
///
/// `Acting` is transient: exactly one call may be in flight per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
	Uncreated,
	Created,
	Acting,
	Closed,
}

/// Policy for `create` while a session is already active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplacePolicy {
	/// Close the existing session best-effort, then create the new one.
	#[default]
	AutoClose,
	/// Fail with a session-state error and keep the existing session.
	Reject,
}

/// At-most-one session slot with an in-flight guard.
#[derive(Debug)]
pub(crate) struct SessionSlot {
	tool: &'static str,
	phase: SessionPhase,
	session_id: Option<String>,
}

impl SessionSlot {
	pub(crate) fn new(tool: &'static str) -> Self {
		Self {
			tool,
			phase: SessionPhase::Uncreated,
			session_id: None,
		}
	}

	pub(crate) fn phase(&self) -> SessionPhase {
		self.phase
	}

	pub(crate) fn session_id(&self) -> Option<&str> {
		self.session_id.as_deref()
	}

	pub(crate) fn is_active(&self) -> bool {
		matches!(self.phase, SessionPhase::Created | SessionPhase::Acting)
	}

	/// Checks that an action may start without mutating the slot.
	pub(crate) fn require_active(&self) -> Result<()> {
		match self.phase {
			SessionPhase::Created => Ok(()),
			SessionPhase::Acting => Err(ClientError::ActionInFlight { tool: self.tool }),
			SessionPhase::Uncreated | SessionPhase::Closed => Err(ClientError::NoActiveSession { tool: self.tool }),
		}
	}

	/// Applies `policy` for a pending create. Returns the session id that
	/// must be closed first, if any.
	pub(crate) fn begin_create(&mut self, policy: ReplacePolicy) -> Result<Option<String>> {
		match self.phase {
			SessionPhase::Acting => Err(ClientError::ActionInFlight { tool: self.tool }),
			SessionPhase::Created => match policy {
				ReplacePolicy::Reject => Err(ClientError::SessionActive {
					tool: self.tool,
					session_id: self.session_id.clone().unwrap_or_default(),
				}),
				ReplacePolicy::AutoClose => {
					let old = self.session_id.take();
					self.phase = SessionPhase::Uncreated;
					Ok(old)
				}
			},
			SessionPhase::Uncreated | SessionPhase::Closed => Ok(None),
		}
	}

	pub(crate) fn set_created(&mut self, session_id: String) {
		self.phase = SessionPhase::Created;
		self.session_id = Some(session_id);
	}

	/// Marks one call in flight and returns the current session id.
	pub(crate) fn begin_action(&mut self) -> Result<String> {
		self.require_active()?;
		match self.session_id.clone() {
			Some(session_id) => {
				self.phase = SessionPhase::Acting;
				Ok(session_id)
			}
			None => Err(ClientError::NoActiveSession { tool: self.tool }),
		}
	}

	pub(crate) fn finish_action(&mut self) {
		if self.phase == SessionPhase::Acting {
			self.phase = SessionPhase::Created;
		}
	}

	/// Clears the slot and returns the session id that was current, if any.
	/// Closing always succeeds locally.
	pub(crate) fn close(&mut self) -> Option<String> {
		self.phase = SessionPhase::Closed;
		self.session_id.take()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ErrorKind;

	#[test]
	fn action_before_create_is_a_session_state_error() {
		let mut slot = SessionSlot::new("terminal");
		let err = slot.begin_action().unwrap_err();
		assert_eq!(err.kind(), ErrorKind::SessionState);
	}

	#[test]
	fn one_call_in_flight_at_a_time() {
		let mut slot = SessionSlot::new("terminal");
		slot.set_created("abc123".to_string());

		let id = slot.begin_action().unwrap();
		assert_eq!(id, "abc123");
		assert!(matches!(slot.begin_action().unwrap_err(), ClientError::ActionInFlight { .. }));

		slot.finish_action();
		assert!(slot.begin_action().is_ok());
	}

	#[test]
	fn reject_policy_keeps_the_existing_session() {
		let mut slot = SessionSlot::new("terminal");
		slot.set_created("abc123".to_string());

		let err = slot.begin_create(ReplacePolicy::Reject).unwrap_err();
		assert!(matches!(err, ClientError::SessionActive { .. }));
		assert_eq!(slot.session_id(), Some("abc123"));
	}

	#[test]
	fn autoclose_policy_hands_back_the_old_session() {
		let mut slot = SessionSlot::new("terminal");
		slot.set_created("abc123".to_string());

		let old = slot.begin_create(ReplacePolicy::AutoClose).unwrap();
		assert_eq!(old.as_deref(), Some("abc123"));
		assert_eq!(slot.session_id(), None);

		slot.set_created("def456".to_string());
		assert_eq!(slot.session_id(), Some("def456"));
	}

	#[test]
	fn close_clears_and_always_succeeds() {
		let mut slot = SessionSlot::new("terminal");
		assert_eq!(slot.close(), None);

		slot.set_created("abc123".to_string());
		assert_eq!(slot.close().as_deref(), Some("abc123"));
		assert_eq!(slot.phase(), SessionPhase::Closed);
		assert!(!slot.is_active());
	}
}
