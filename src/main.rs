//! Introduction + echo JSON service entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use smeet_api::api::create_router;
use smeet_api::config::Config;
use smeet_api::error::ServiceError;
use smeet_api::utils::shutdown_signal;

/// Tiny introduction + echo JSON service.
#[derive(Parser, Debug)]
#[command(name = "smeet-api")]
#[command(about = "Serves a fixed introduction record and echoes path segments")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Interface to bind.
    #[arg(long)]
    host: Option<String>,

    /// HTTP server port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Run {
        /// Interface to bind.
        #[arg(long)]
        host: Option<String>,

        /// HTTP server port.
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("smeet_api=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::Run { host, port }) => cmd_run(host, port).await,
        None => cmd_run(args.host, args.port).await,
    }
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("Configuration Summary:");
    println!("  Bind Address: {}:{}", config.host, config.port);
    println!("  Log Level: {}", config.rust_log);

    Ok(())
}

/// Run the HTTP server.
async fn cmd_run(host_override: Option<String>, port_override: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        ServiceError::Config(e)
    })?;

    // Override with CLI args if provided
    if let Some(host) = host_override {
        config.host = host;
    }
    if let Some(port) = port_override {
        config.port = port;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(ServiceError::InvalidConfig(e).into());
    }

    let addr = config.socket_addr().map_err(ServiceError::Addr)?;
    let listener = TcpListener::bind(addr).await.map_err(ServiceError::Io)?;
    info!("HTTP server listening on {}", addr);

    let router = create_router();

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServiceError::Io)?;

    info!("Server stopped");
    Ok(())
}
