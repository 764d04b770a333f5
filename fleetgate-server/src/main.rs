//! fleetgate binary entry point.
//!
//! Loads configuration (TOML file plus `DATABASE_URL` override), initializes
//! tracing, and runs the HTTP server until Ctrl+C or SIGTERM.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use fleetgate_core::FleetConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "fleetgate",
    version,
    about = "Read-only HTTP facade over the fleet Postgres database"
)]
struct Cli {
    /// Path to a TOML config file (default: fleetgate.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured listener port
    #[arg(long)]
    port: Option<u16>,

    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let mut config = FleetConfig::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        staleness_threshold_secs = config.analytics.staleness_threshold_secs,
        "starting fleetgate"
    );

    fleetgate_server::serve(config).await?;
    Ok(())
}

fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
