//! # Maxim Server
//!
//! Main entry point for the maxim quote service.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! maxim-server
//!
//! # Run with custom configuration file
//! maxim-server --config /path/to/config.toml
//!
//! # Run with environment variable overrides
//! MAXIM_SERVER_PORT=9090 maxim-server
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use maxim_api::ApiServer;
use maxim_core::{Dataset, QuoteCatalog};
use maxim_server::shutdown::shutdown_signal;
use maxim_server::ServerConfig;

/// Maxim Quote Server
#[derive(Parser, Debug)]
#[command(name = "maxim-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Override server host
    #[arg(long, env = "MAXIM_SERVER_HOST")]
    host: Option<String>,

    /// Override server port
    #[arg(long, env = "MAXIM_SERVER_PORT")]
    port: Option<u16>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Validate configuration and dataset, then exit
    #[arg(long)]
    validate: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Load configuration
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.level);

    // Validate only mode
    if args.validate {
        match Dataset::load() {
            Ok(dataset) => {
                println!("Configuration is valid ({} quotes)", dataset.len());
                return;
            }
            Err(e) => {
                eprintln!("Dataset validation failed: {e}");
                std::process::exit(1);
            }
        }
    }

    // Create and run server
    match run_server(config).await {
        Ok(()) => {
            info!("Maxim server stopped");
        }
        Err(e) => {
            error!("Server error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Loads configuration from file and applies overrides.
fn load_config(args: &Args) -> Result<ServerConfig, Box<dyn std::error::Error>> {
    let mut config = if args.config.exists() {
        ServerConfig::load(&args.config)?
    } else {
        // Use default configuration if file doesn't exist
        eprintln!(
            "Configuration file not found: {}, using defaults",
            args.config.display()
        );
        ServerConfig::default()
    };

    // Apply command-line overrides
    if let Some(host) = &args.host {
        config.api.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }
    if args.debug {
        config.logging.level = "debug".to_string();
    }

    Ok(config)
}

/// Initializes the tracing subscriber from the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Loads the dataset and runs the server until shutdown.
async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // The dataset must load and be non-empty before the listener opens.
    let dataset = Dataset::load()?;
    info!("Loaded {} quotes", dataset.len());

    let catalog = QuoteCatalog::new(dataset);
    let server = ApiServer::new(config.api, catalog);

    server.run_with_shutdown(shutdown_signal()).await?;

    Ok(())
}
