use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Client-side failure taxonomy.
///
/// Validation and session-state failures resolve locally without a network
/// round trip; gateway and transport failures surface the downstream message
/// verbatim. Nothing here retries automatically.
#[derive(Debug, Error)]
pub enum ClientError {
	/// Operator-facing configuration problem (bad gateway URL, ...).
	#[error("configuration error: {0}")]
	Config(String),

	/// A required parameter was missing or empty.
	#[error("{0}")]
	InvalidParams(String),

	/// An action was attempted without an active session.
	#[error("No active {tool} session. Please create a session first.")]
	NoActiveSession { tool: &'static str },

	/// A call was attempted while another one is still in flight.
	#[error("a {tool} call is already in flight")]
	ActionInFlight { tool: &'static str },

	/// Session creation was rejected because one is already active.
	#[error("a {tool} session is already active: {session_id}")]
	SessionActive { tool: &'static str, session_id: String },

	/// The gateway (or the vendor behind it) rejected the call.
	#[error("{message}")]
	Gateway { status: u16, message: String },

	#[error("gateway request failed: {0}")]
	Transport(#[from] reqwest::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

/// Coarse classification used for display and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	Configuration,
	Validation,
	SessionState,
	Vendor,
}

impl ClientError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			ClientError::Config(_) => ErrorKind::Configuration,
			ClientError::InvalidParams(_) => ErrorKind::Validation,
			ClientError::NoActiveSession { .. } | ClientError::ActionInFlight { .. } | ClientError::SessionActive { .. } => {
				ErrorKind::SessionState
			}
			ClientError::Gateway { .. } | ClientError::Transport(_) | ClientError::Json(_) => ErrorKind::Vendor,
		}
	}
}
