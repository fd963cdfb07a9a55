//! Structured output envelope for CLI commands.
//!
//! Every command prints a result envelope on stdout:
//!
//! ```json
//! { "ok": true, "command": "exec", "data": { ... } }
//! ```
//!
//! On failure:
//!
//! ```json
//! { "ok": false, "command": "exec", "error": { "code": "VENDOR_ERROR", "message": "..." } }
//! ```

use colored::Colorize;
use serde::Serialize;

/// Output format for CLI results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	/// JSON envelope (default)
	#[default]
	Json,
	/// Human-readable text
	Text,
}

/// The result envelope printed by every command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult<T: Serialize> {
	/// Whether the command succeeded
	pub ok: bool,

	/// Command name (e.g., "exec", "browse", "search")
	pub command: &'static str,

	/// Command-specific result data (only present on success)
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,

	/// Error information (only present on failure)
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<CommandError>,
}

/// Error information for failed commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
	pub code: ErrorCode,
	pub message: String,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<serde_json::Value>,
}

/// Standardized error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
	/// Operator-facing configuration problem
	ConfigError,
	/// Invalid input provided
	InvalidInput,
	/// Session lifecycle violation
	SessionError,
	/// Gateway or vendor failure
	VendorError,
	/// File I/O error
	IoError,
	/// Unknown/internal error
	InternalError,
}

pub fn success<T: Serialize>(command: &'static str, data: T) -> CommandResult<T> {
	CommandResult {
		ok: true,
		command,
		data: Some(data),
		error: None,
	}
}

pub fn failure(command: &'static str, error: CommandError) -> CommandResult<serde_json::Value> {
	CommandResult {
		ok: false,
		command,
		data: None,
		error: Some(error),
	}
}

/// Prints the envelope in the requested format.
pub fn print_result<T: Serialize>(result: &CommandResult<T>, format: OutputFormat) {
	match format {
		OutputFormat::Json => match serde_json::to_string_pretty(result) {
			Ok(rendered) => println!("{rendered}"),
			Err(err) => eprintln!("failed to serialize output: {err}"),
		},
		OutputFormat::Text => print_text(result),
	}
}

fn print_text<T: Serialize>(result: &CommandResult<T>) {
	let Some(data) = &result.data else { return };
	match serde_json::to_value(data) {
		Ok(serde_json::Value::Object(map)) => {
			for (key, value) in map {
				match value {
					serde_json::Value::String(text) => println!("{key}: {text}"),
					serde_json::Value::Array(items) => {
						println!("{key}:");
						for item in items {
							match item {
								serde_json::Value::String(line) => println!("  {line}"),
								other => println!("  {other}"),
							}
						}
					}
					other => println!("{key}: {other}"),
				}
			}
		}
		Ok(other) => println!("{other}"),
		Err(err) => eprintln!("failed to render output: {err}"),
	}
}

pub fn print_error_stderr(error: &CommandError) {
	eprintln!("{} {}", "error:".red().bold(), error.message);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn success_envelope_has_no_error_field() {
		let result = success("exec", serde_json::json!({ "output": "/workspace" }));
		let rendered = serde_json::to_value(&result).unwrap();
		assert_eq!(rendered["ok"], true);
		assert_eq!(rendered["command"], "exec");
		assert_eq!(rendered["data"]["output"], "/workspace");
		assert!(rendered.get("error").is_none());
	}

	#[test]
	fn failure_envelope_carries_the_code() {
		let result = failure(
			"search",
			CommandError {
				code: ErrorCode::VendorError,
				message: "Search API error: 500".to_string(),
				details: None,
			},
		);
		let rendered = serde_json::to_value(&result).unwrap();
		assert_eq!(rendered["ok"], false);
		assert_eq!(rendered["error"]["code"], "VENDOR_ERROR");
		assert!(rendered.get("data").is_none());
	}
}
