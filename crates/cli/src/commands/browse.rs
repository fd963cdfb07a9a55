//! Drive a browser session through a scripted flow.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use toolgate::{BrowserManager, HttpTransport};

use crate::cli::BrowseArgs;
use crate::error::{CliError, Result};
use crate::output::{self, OutputFormat};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BrowseData {
	session_id: String,

	#[serde(skip_serializing_if = "Option::is_none")]
	preview_url: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	url: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	title: Option<String>,

	log: Vec<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	screenshot_url: Option<String>,
}

pub async fn run(gateway_url: &str, args: BrowseArgs, format: OutputFormat) -> Result<()> {
	let typing = parse_type_args(&args.type_into)?;

	let transport = Arc::new(HttpTransport::new(gateway_url)?);
	let mut browser = BrowserManager::new(transport);

	let session = browser.create_session().await?;
	info!(target = "toolgate.cli", session_id = %session.session_id, "browser session created");

	let outcome = drive(&mut browser, &args, &typing).await;
	let screenshot_url = match outcome {
		Ok(screenshot_url) => screenshot_url,
		Err(err) => {
			browser.close_session().await;
			return Err(err);
		}
	};

	let data = BrowseData {
		session_id: session.session_id.clone(),
		preview_url: session.preview_url.clone(),
		url: browser.current_url().map(str::to_string),
		title: browser.current_title().map(str::to_string),
		log: browser.action_log().iter().map(ToString::to_string).collect(),
		screenshot_url,
	};
	browser.close_session().await;

	output::print_result(&output::success("browse", data), format);
	Ok(())
}

async fn drive(browser: &mut BrowserManager, args: &BrowseArgs, typing: &[(String, String)]) -> Result<Option<String>> {
	browser.navigate(&args.url).await?;

	for selector in &args.click {
		browser.click(selector).await?;
	}
	for (selector, text) in typing {
		browser.type_text(selector, text).await?;
	}

	if args.screenshot {
		let echo = browser.screenshot().await?;
		return Ok(echo.image_url);
	}
	Ok(None)
}

fn parse_type_args(raw: &[String]) -> Result<Vec<(String, String)>> {
	raw.iter().map(|arg| parse_type_arg(arg)).collect()
}

fn parse_type_arg(raw: &str) -> Result<(String, String)> {
	match raw.split_once('=') {
		Some((selector, text)) if !selector.is_empty() && !text.is_empty() => {
			Ok((selector.to_string(), text.to_string()))
		}
		_ => Err(CliError::TypeArg(raw.to_string())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_selector_and_text() {
		let (selector, text) = parse_type_arg("#q=rust async").unwrap();
		assert_eq!(selector, "#q");
		assert_eq!(text, "rust async");
	}

	#[test]
	fn text_may_contain_equals_signs() {
		let (selector, text) = parse_type_arg("input[name=q]=a=b").unwrap();
		assert_eq!(selector, "input[name");
		assert_eq!(text, "q]=a=b");
	}

	#[test]
	fn rejects_missing_text() {
		assert!(parse_type_arg("#q=").is_err());
		assert!(parse_type_arg("#q").is_err());
		assert!(parse_type_arg("=rust").is_err());
	}
}
