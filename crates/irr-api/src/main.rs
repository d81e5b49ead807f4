//! IRR API Server binary.

use std::path::PathBuf;

use clap::Parser;
use irr_api::{run_server, ServerConfig};
use tracing_subscriber::EnvFilter;

/// Cash-flow IRR REST API Server
#[derive(Parser, Debug)]
#[command(name = "irr-api-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "IRR_CONFIG")]
    config: Option<PathBuf>,

    /// Host address to bind to (overrides the configuration file)
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Port to listen on (overrides the configuration file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_filter = if args.verbose {
        "debug,tower_http=debug"
    } else {
        "info,tower_http=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    tracing::info!("IRR API Server v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            ServerConfig::from_file(path)?
        }
        None => {
            tracing::info!("Using default configuration");
            ServerConfig::default()
        }
    };

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    run_server(config).await
}
