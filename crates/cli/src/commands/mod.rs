//! Command implementations.

mod browse;
mod exec;
mod route;
mod search;

use crate::cli::{Cli, Commands};
use crate::error::Result;

pub async fn dispatch(cli: Cli) -> Result<()> {
	let format = cli.format;
	match cli.command {
		Commands::Exec(args) => exec::run(&cli.gateway_url, args, format).await,
		Commands::Browse(args) => browse::run(&cli.gateway_url, args, format).await,
		Commands::Search(args) => search::run(&cli.gateway_url, args, format).await,
		Commands::Route(args) => route::run(&args, format),
	}
}
