//! End-to-end CLI flows against an in-process mock gateway.

use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

fn toolgate_binary() -> PathBuf {
	let mut path = std::env::current_exe().unwrap();
	path.pop();
	path.pop();
	path.push("toolgate");
	path
}

async fn spawn_gateway(app: Router) -> String {
	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	tokio::spawn(async move {
		axum::serve(listener, app).await.unwrap();
	});
	format!("http://{addr}")
}

async fn run_toolgate(gateway: String, args: Vec<String>) -> std::process::Output {
	tokio::task::spawn_blocking(move || {
		Command::new(toolgate_binary())
			.env("TOOLGATE_GATEWAY_URL", gateway)
			.args(args)
			.output()
			.expect("failed to execute toolgate")
	})
	.await
	.unwrap()
}

fn parse_stdout(output: &std::process::Output) -> Value {
	let stdout = String::from_utf8_lossy(&output.stdout);
	serde_json::from_str(&stdout).unwrap_or_else(|_| json!({ "raw": stdout }))
}

#[tokio::test]
async fn search_prints_a_success_envelope() {
	let app = Router::new().route(
		"/web-search",
		post(|Json(body): Json<Value>| async move {
			Json(json!({
				"query": body["query"],
				"results": [{ "title": "Rust", "url": "https://rust-lang.org", "snippet": "a language" }],
				"answer": null,
				"totalResults": 1,
			}))
		}),
	);
	let gateway = spawn_gateway(app).await;

	let output = run_toolgate(gateway, vec!["-f".into(), "json".into(), "search".into(), "rust async".into()]).await;
	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

	let envelope = parse_stdout(&output);
	assert_eq!(envelope["ok"], true);
	assert_eq!(envelope["command"], "search");
	assert_eq!(envelope["data"]["query"], "rust async");
	assert_eq!(envelope["data"]["totalResults"], 1);
}

#[tokio::test]
async fn exec_creates_executes_and_closes_in_order() {
	let actions: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

	async fn terminal_session(State(actions): State<Arc<Mutex<Vec<String>>>>, Json(body): Json<Value>) -> Json<Value> {
		let action = body["action"].as_str().unwrap_or_default().to_string();
		actions.lock().unwrap().push(action.clone());
		match action.as_str() {
			"create" => Json(json!({ "sessionId": "abc123", "status": "created" })),
			"execute" => Json(json!({
				"command": body["command"],
				"output": "/workspace",
				"error": "",
				"exitCode": 0,
				"executionTime": 7,
			})),
			_ => Json(json!({ "sessionId": body["sessionId"], "status": "closed" })),
		}
	}

	let app = Router::new()
		.route("/terminal-session", post(terminal_session))
		.with_state(Arc::clone(&actions));
	let gateway = spawn_gateway(app).await;

	let output = run_toolgate(gateway, vec!["exec".into(), "pwd".into()]).await;
	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

	let envelope = parse_stdout(&output);
	assert_eq!(envelope["ok"], true);
	assert_eq!(envelope["command"], "exec");
	assert_eq!(envelope["data"]["command"], "pwd");
	assert_eq!(envelope["data"]["output"], "/workspace");
	assert_eq!(envelope["data"]["exitCode"], 0);

	assert_eq!(*actions.lock().unwrap(), vec!["create", "execute", "close"]);
}

#[tokio::test]
async fn gateway_failure_yields_a_failure_envelope_and_nonzero_exit() {
	let app = Router::new().route(
		"/terminal-session",
		post(|| async {
			(
				axum::http::StatusCode::BAD_GATEWAY,
				Json(json!({ "error": "Failed to create sandbox session: 500" })),
			)
		}),
	);
	let gateway = spawn_gateway(app).await;

	let output = run_toolgate(gateway, vec!["exec".into(), "pwd".into()]).await;
	assert!(!output.status.success());

	let envelope = parse_stdout(&output);
	assert_eq!(envelope["ok"], false);
	assert_eq!(envelope["error"]["code"], "VENDOR_ERROR");
	assert_eq!(envelope["error"]["message"], "Failed to create sandbox session: 500");
}

#[tokio::test]
async fn route_classifies_without_touching_the_gateway() {
	// No gateway is started; the URL is never dereferenced for `route`.
	let output = run_toolgate(
		"http://127.0.0.1:9".to_string(),
		vec!["route".into(), "search for rust async runtimes".into()],
	)
	.await;
	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

	let envelope = parse_stdout(&output);
	assert_eq!(envelope["ok"], true);
	assert_eq!(envelope["data"]["route"]["tool"], "search");
	assert_eq!(envelope["data"]["route"]["hint"], "rust async runtimes");
}
