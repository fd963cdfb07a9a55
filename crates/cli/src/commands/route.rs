//! Route free text to a tool with the keyword classifier.

use serde_json::json;

use toolgate::{IntentClassifier, KeywordClassifier};

use crate::cli::RouteArgs;
use crate::error::Result;
use crate::output::{self, OutputFormat};

pub fn run(args: &RouteArgs, format: OutputFormat) -> Result<()> {
	let classifier = KeywordClassifier::new();
	let route = classifier.classify(&args.text);

	output::print_result(&output::success("route", json!({ "route": route })), format);
	Ok(())
}
