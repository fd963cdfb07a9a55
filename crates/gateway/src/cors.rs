//! Permissive CORS for browser-hosted callers.

use axum::extract::Request;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Answers OPTIONS preflight with no body and stamps CORS headers on every
/// other response.
pub async fn cors(request: Request, next: Next) -> Response {
	if request.method() == Method::OPTIONS {
		let mut response = StatusCode::NO_CONTENT.into_response();
		apply(response.headers_mut());
		return response;
	}

	let mut response = next.run(request).await;
	apply(response.headers_mut());
	response
}

fn apply(headers: &mut HeaderMap) {
	headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
	headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
}
