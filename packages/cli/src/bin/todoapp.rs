use clap::Parser;
use colored::*;
use std::process;
use tracing::{error, info};

use todoapp_cli::logging::init_tracing;
use todoapp_cli::{run, Config, ServerResult};

#[derive(Parser)]
#[command(name = "todoapp")]
#[command(about = "Todo service - JSON CRUD API over a relational todos table")]
#[command(version)]
struct Cli {
    /// Address to bind (overrides TODOAPP_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load .env file
    dotenvy::dotenv().ok();

    init_tracing();

    if let Err(e) = start(cli).await {
        error!("{}", e);
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn start(cli: Cli) -> ServerResult<()> {
    let config = Config::from_env()?.with_overrides(cli.host, cli.port);

    info!(
        "Starting todo service on {}:{} (max connections: {})",
        config.host, config.port, config.max_connections
    );

    run(config).await
}
