//! Reacto gateway (v1)
//!
//! Hosts the JSON-over-HTTP replacement for the Reacto SOAP service.
//!
//! # Architecture Overview
//!
//! ```text
//!                   ┌──────────────────────────────────────────────────────┐
//!                   │                    REACTO GATEWAY                     │
//!                   │                                                       │
//!   POST /api/Call  │  ┌─────────┐   ┌─────────┐   ┌──────────┐            │
//!   ────────────────┼─▶│ session │──▶│ catalog │──▶│   args   │            │
//!                   │  └─────────┘   └─────────┘   └────┬─────┘            │
//!                   │       │                           ▼                   │
//!   ?view_error=ID  │       ▼                     ┌──────────┐             │  X-HTTP-Method-Override
//!   ────────────────┼─▶ errors viewer             │  client  │─────────────┼────────────▶ Reacto ERP
//!                   │       ▲                     └────┬─────┘             │
//!                   │       │ capture on failure       ▼                   │
//!   JSON rows /     │  ┌─────────┐              ┌──────────┐             │
//!   error page  ◀───┼──│ errors  │◀─────────────│  decode  │◀────────────┼──────────── TableData.Row
//!                   │  └─────────┘              └──────────┘             │
//!                   └──────────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use reacto_gateway::config::{default_config, load_config};
use reacto_gateway::http::{shutdown_signal, GatewayServer};
use reacto_gateway::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "reacto-gateway")]
#[command(about = "JSON-over-HTTP gateway for the Reacto ERP service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => default_config()?,
    };

    logging::init_tracing(&config.observability.log_level);
    tracing::info!("reacto-gateway v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.url,
        connect_timeout_secs = config.upstream.connect_timeout_secs,
        request_timeout_secs = config.upstream.request_timeout_secs,
        error_capacity = config.errors.capacity,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = GatewayServer::new(config)?;
    server.run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
