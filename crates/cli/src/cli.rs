use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Root CLI for toolgate.
#[derive(Parser, Debug)]
#[command(name = "toolgate")]
#[command(about = "Agent tool sessions over the toolgate gateway")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format: json (default) or text
	#[arg(short = 'f', long, global = true, value_enum, default_value = "json")]
	pub format: OutputFormat,

	/// Gateway base URL
	#[arg(
		long,
		global = true,
		value_name = "URL",
		env = "TOOLGATE_GATEWAY_URL",
		default_value = "http://127.0.0.1:8787"
	)]
	pub gateway_url: String,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Run one command in a fresh sandbox session.
	Exec(ExecArgs),
	/// Drive a browser session through a scripted flow.
	Browse(BrowseArgs),
	/// Run a web search.
	Search(SearchArgs),
	/// Route free text to a tool with the keyword classifier.
	Route(RouteArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ExecArgs {
	/// Command line to execute in the sandbox
	#[arg(value_name = "COMMAND")]
	pub command: String,
}

#[derive(Args, Debug, Clone)]
pub struct BrowseArgs {
	/// URL to open
	#[arg(value_name = "URL")]
	pub url: String,

	/// Click a selector after navigation (repeatable, runs in order)
	#[arg(long, value_name = "SELECTOR")]
	pub click: Vec<String>,

	/// Type text into a selector after clicks, as SELECTOR=TEXT (repeatable)
	#[arg(long = "type", value_name = "SELECTOR=TEXT")]
	pub type_into: Vec<String>,

	/// Capture a screenshot at the end of the flow
	#[arg(long)]
	pub screenshot: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
	/// Search query
	#[arg(value_name = "QUERY")]
	pub query: String,

	/// Maximum number of results
	#[arg(long, value_name = "N", default_value_t = 5)]
	pub max_results: u32,
}

#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
	/// Free-text request to classify
	#[arg(value_name = "TEXT")]
	pub text: String,
}
