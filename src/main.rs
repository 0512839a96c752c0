//! Standalone relay process.
//!
//! Serves the relay router on its own listener (default port 3000, `PORT`
//! env override) until ctrl-c or SIGTERM, with an optional Prometheus
//! exporter.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use cors_relay::config::loader::{apply_port_override, load_config};
use cors_relay::config::RelayConfig;
use cors_relay::http::RelayServer;
use cors_relay::lifecycle::{shutdown_signal, Shutdown};
use cors_relay::observability::{logging, metrics};

#[derive(Parser)]
#[command(
    name = "cors-relay",
    about = "CORS-normalizing relay in front of one upstream API"
)]
struct Args {
    /// Path to a TOML configuration file; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };
    apply_port_override(&mut config);

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.origin,
        api_base = %config.upstream.api_base,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    let server = RelayServer::new(config);
    server.run(listener, receiver).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
