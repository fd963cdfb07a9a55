//! Run a web search through the gateway.

use std::sync::Arc;

use toolgate::{HttpTransport, SearchClient};

use crate::cli::SearchArgs;
use crate::error::{CliError, Result};
use crate::output::{self, CommandError, ErrorCode, OutputFormat};

pub async fn run(gateway_url: &str, args: SearchArgs, format: OutputFormat) -> Result<()> {
	let transport = Arc::new(HttpTransport::new(gateway_url)?);
	let mut search = SearchClient::new(transport);

	let response = search.search(&args.query, args.max_results).await?;

	// A vendor failure resolves to an empty result set with the message
	// recorded; report it as a failure envelope and exit non-zero.
	if let Some(message) = response.error.clone() {
		let error = CommandError {
			code: ErrorCode::VendorError,
			message,
			details: Some(serde_json::to_value(&response)?),
		};
		output::print_error_stderr(&error);
		output::print_result(&output::failure("search", error), format);
		return Err(CliError::OutputAlreadyPrinted);
	}

	output::print_result(&output::success("search", response), format);
	Ok(())
}
