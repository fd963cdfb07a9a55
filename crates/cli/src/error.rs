use thiserror::Error;

use toolgate::{ClientError, ErrorKind};

use crate::output::{CommandError, ErrorCode};

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
	/// Command failed but its envelope has already been printed.
	/// Used to signal exit code 1 without additional output.
	#[error("")]
	OutputAlreadyPrinted,

	#[error(transparent)]
	Client(#[from] ClientError),

	#[error("invalid --type argument: {0} (expected SELECTOR=TEXT)")]
	TypeArg(String),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl CliError {
	/// Check if this error indicates output has already been printed.
	/// When true, the caller should exit with code 1 without printing more.
	pub fn is_output_already_printed(&self) -> bool {
		matches!(self, CliError::OutputAlreadyPrinted)
	}

	/// Convert this error to a CommandError for structured output.
	pub fn to_command_error(&self) -> CommandError {
		let (code, message) = match self {
			CliError::OutputAlreadyPrinted => (ErrorCode::InternalError, String::new()),
			CliError::Client(err) => {
				let code = match err.kind() {
					ErrorKind::Configuration => ErrorCode::ConfigError,
					ErrorKind::Validation => ErrorCode::InvalidInput,
					ErrorKind::SessionState => ErrorCode::SessionError,
					ErrorKind::Vendor => ErrorCode::VendorError,
				};
				(code, err.to_string())
			}
			CliError::TypeArg(_) => (ErrorCode::InvalidInput, self.to_string()),
			CliError::Json(err) => (ErrorCode::InternalError, err.to_string()),
			CliError::Io(err) => (ErrorCode::IoError, err.to_string()),
		};

		CommandError {
			code,
			message,
			details: None,
		}
	}
}
