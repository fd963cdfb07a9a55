use clap::Parser;
use toolgate_cli::{
    cli::Cli,
    commands,
    error::CliError,
    logging,
    output::{self, OutputFormat},
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let format = cli.format;

    if let Err(err) = commands::dispatch(cli).await {
        // If output was already printed (e.g., a failure envelope), just exit
        if !err.is_output_already_printed() {
            handle_error(err, format);
        }
        std::process::exit(1);
    }
}

fn handle_error(err: CliError, format: OutputFormat) {
    let cmd_error = err.to_command_error();

    // Always print to stderr for humans
    output::print_error_stderr(&cmd_error);

    // Also emit a JSON envelope to stdout with ok=false (for agents)
    if format != OutputFormat::Text {
        let result = output::failure("unknown", cmd_error);
        output::print_result(&result, format);
    }
}
