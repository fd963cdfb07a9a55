//! Run one command in a fresh sandbox session.

use std::sync::Arc;

use tracing::info;

use toolgate::{HttpTransport, TerminalManager};

use crate::cli::ExecArgs;
use crate::error::Result;
use crate::output::{self, OutputFormat};

pub async fn run(gateway_url: &str, args: ExecArgs, format: OutputFormat) -> Result<()> {
	let transport = Arc::new(HttpTransport::new(gateway_url)?);
	let mut terminal = TerminalManager::new(transport);

	let session = terminal.create_session().await?;
	info!(target = "toolgate.cli", session_id = %session.session_id, "terminal session created");

	// Session teardown happens regardless of the command outcome.
	let outcome = terminal.execute(&args.command).await;
	terminal.close_session().await;
	let record = outcome?;

	output::print_result(&output::success("exec", record), format);
	Ok(())
}
