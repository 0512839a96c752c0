//! Developer CORS proxy.
//!
//! Secondary hosting surface for local development: the same relay core on
//! its own default port (3001, `PORT` env override), with every inbound
//! request logged and `Access-Control-Allow-Credentials` enabled so browser
//! setups that send cookies keep working.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use cors_relay::config::loader::{apply_port_override, load_config, with_port};
use cors_relay::config::RelayConfig;
use cors_relay::http::RelayServer;
use cors_relay::lifecycle::{shutdown_signal, Shutdown};
use cors_relay::observability::logging;

/// Default port, one above the standalone relay so both run side by side.
const DEFAULT_PORT: u16 = 3001;

#[derive(Parser)]
#[command(
    name = "dev-proxy",
    about = "Developer CORS proxy with per-request logging"
)]
struct Args {
    /// Path to a TOML configuration file; dev defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => {
            let mut config = RelayConfig::default();
            config.listener.bind_address =
                with_port(&config.listener.bind_address, DEFAULT_PORT);
            config
        }
    };
    // Part of the dev proxy's surface, whatever the config file says.
    config.cors.allow_credentials = true;
    apply_port_override(&mut config);

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.origin,
        "Dev proxy starting"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    let server = RelayServer::with_diagnostics(config);
    server.run(listener, receiver).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
