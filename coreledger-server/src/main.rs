//! CoreLedger Server Binary

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use coreledger_config::{ConfigLoader, CoreLedgerConfig, Environment};
use coreledger_logging::init_logging;
use coreledger_server::Server;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Server bind address, e.g. 0.0.0.0:5000
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Database URL
    #[arg(long)]
    database_url: Option<String>,

    /// Deployment environment (development or production)
    #[arg(short, long)]
    environment: Option<Environment>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::new().load(cli.config.as_ref())?;
    apply_cli_overrides(&mut config, &cli);
    config.validate_all()?;

    if cli.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    let logging = init_logging(&config.logging)?;
    tracing::info!("Starting CoreLedger server");

    let result = match Server::new(config).await {
        Ok(server) => server.start().await,
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        tracing::error!("Server failed: {:#}", e);
    }

    logging.shutdown();
    result
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut CoreLedgerConfig, cli: &Cli) {
    if let Some(bind) = cli.bind {
        config.server.bind_address = bind.ip().to_string();
        config.server.port = bind.port();
    }

    if let Some(database_url) = &cli.database_url {
        config.database.url = database_url.clone();
    }

    if let Some(environment) = cli.environment {
        config.environment = environment;
    }
}
