//! Router construction and serve loop.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router, middleware};
use tracing::info;

use toolgate_protocol::{GatewayRequest, SearchRequest};

use crate::config::GatewayConfig;
use crate::cors;
use crate::dispatch;
use crate::error::GatewayError;
use crate::vendors::{BrowserVendor, SandboxVendor, SearchVendor};

/// Shared state for all gateway routes.
pub struct AppState {
	pub sandbox: SandboxVendor,
	pub browser: BrowserVendor,
	pub search: SearchVendor,
}

impl AppState {
	/// Builds vendor adapters from resolved configuration. One HTTP client
	/// is shared across adapters.
	pub fn new(config: &GatewayConfig) -> Self {
		let http = reqwest::Client::new();
		Self {
			sandbox: SandboxVendor::new(http.clone(), config.sandbox.clone()),
			browser: BrowserVendor::new(http.clone(), config.browser.clone()),
			search: SearchVendor::new(http, config.search.clone()),
		}
	}
}

/// Builds the gateway router with CORS applied to every route.
pub fn router(state: Arc<AppState>) -> Router {
	Router::new()
		.route("/terminal-session", post(terminal_session))
		.route("/browser-session", post(browser_session))
		.route("/web-search", post(web_search))
		.layer(middleware::from_fn(cors::cors))
		.with_state(state)
}

/// Binds the configured address and serves until the process stops.
pub async fn serve(config: GatewayConfig) -> anyhow::Result<()> {
	let state = Arc::new(AppState::new(&config));
	let app = router(state);

	let listener = tokio::net::TcpListener::bind(config.listen).await?;
	info!(target = "toolgate.gateway", addr = %config.listen, "gateway listening");
	axum::serve(listener, app).await?;
	Ok(())
}

async fn terminal_session(State(state): State<Arc<AppState>>, Json(request): Json<GatewayRequest>) -> Response {
	match dispatch::dispatch(&state.sandbox, &request).await {
		Ok(body) => Json(body).into_response(),
		Err(err) => err.into_response(),
	}
}

async fn browser_session(State(state): State<Arc<AppState>>, Json(request): Json<GatewayRequest>) -> Response {
	match dispatch::dispatch(&state.browser, &request).await {
		Ok(body) => Json(body).into_response(),
		Err(err) => err.into_response(),
	}
}

async fn web_search(State(state): State<Arc<AppState>>, Json(request): Json<SearchRequest>) -> Response {
	let query = match request.query.as_deref().map(str::trim) {
		Some(query) if !query.is_empty() => query.to_string(),
		_ => {
			let err = GatewayError::MissingParam {
				action: "search".to_string(),
				param: "query",
			};
			return err.into_search_response();
		}
	};

	match state.search.search(&query, request.max_results).await {
		Ok(body) => Json(body).into_response(),
		Err(err) => err.into_search_response(),
	}
}
