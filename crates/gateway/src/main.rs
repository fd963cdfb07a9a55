use clap::Parser;
use toolgate_gateway::{config::GatewayConfig, logging, server};

/// Credential-holding proxy for agent tool sessions.
#[derive(Parser, Debug)]
#[command(name = "toolgate-gateway")]
#[command(version)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = match GatewayConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err:#}");
            std::process::exit(2);
        }
    };

    if let Err(err) = server::serve(config).await {
        eprintln!("gateway error: {err:#}");
        std::process::exit(1);
    }
}
