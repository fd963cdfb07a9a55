use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Failure channel for gateway request handling.
///
/// Validation failures map to 400, downstream vendor failures to 502,
/// internal faults to 500. The body is always `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum GatewayError {
	/// A required per-action parameter was absent or empty.
	#[error("{param} is required for {action}")]
	MissingParam { action: String, param: &'static str },

	#[error("unknown action: {0}")]
	UnknownAction(String),

	/// Downstream vendor returned a non-success status.
	#[error("{message}")]
	Vendor { status: u16, message: String },

	/// Transport-level failure reaching the vendor.
	#[error("vendor request failed: {0}")]
	Upstream(#[from] reqwest::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

impl GatewayError {
	pub fn status_code(&self) -> StatusCode {
		match self {
			GatewayError::MissingParam { .. } | GatewayError::UnknownAction(_) => StatusCode::BAD_REQUEST,
			GatewayError::Vendor { .. } | GatewayError::Upstream(_) => StatusCode::BAD_GATEWAY,
			GatewayError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Failure envelope for `/web-search`, which always carries an empty
	/// result list so callers never observe a missing `results` field.
	pub fn into_search_response(self) -> Response {
		let status = self.status_code();
		let body = json!({
			"error": self.to_string(),
			"query": null,
			"results": [],
		});
		(status, Json(body)).into_response()
	}
}

impl IntoResponse for GatewayError {
	fn into_response(self) -> Response {
		let status = self.status_code();
		(status, Json(json!({ "error": self.to_string() }))).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn validation_failures_are_client_errors() {
		let err = GatewayError::MissingParam {
			action: "execute".to_string(),
			param: "sessionId",
		};
		assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
		assert_eq!(err.to_string(), "sessionId is required for execute");

		assert_eq!(
			GatewayError::UnknownAction("navigate".to_string()).status_code(),
			StatusCode::BAD_REQUEST
		);
	}

	#[test]
	fn vendor_failures_are_bad_gateway() {
		let err = GatewayError::Vendor {
			status: 500,
			message: "Failed to execute command: 500".to_string(),
		};
		assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
	}
}
