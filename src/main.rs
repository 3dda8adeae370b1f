//! CORS relay.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser                      ┌───────────────────────────────────────┐
//!     ─── OPTIONS ────────────────▶│  preflight: 204 + CORS headers        │
//!     ◀───────────────────────────│  (backend never contacted)            │
//!                                  │                                       │
//!     ─── GET/POST/PUT/DELETE ───▶│  strip hop-by-hop ──▶ backend origin ─┼──▶ Backend
//!     ◀───────────────────────────│  strip transport  ◀── response       ◀┼─── API
//!                                  │  + Access-Control-Allow-Origin: *     │
//!                                  └───────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use cors_relay::config::{read_config, validate_config, ConfigError, RelayConfig};
use cors_relay::lifecycle::{wait_for_termination, Shutdown};
use cors_relay::observability::{logging, metrics};
use cors_relay::RelayServer;

#[derive(Parser, Debug)]
#[command(name = "cors-relay")]
#[command(about = "Relay a backend API to browsers with permissive CORS headers", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Interface to bind
    #[arg(long)]
    bind: Option<String>,

    /// Backend origin, e.g. http://localhost:5000
    #[arg(short, long)]
    backend: Option<String>,

    /// Backend round-trip timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Do not log relayed response bodies
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// File (or defaults) first, then command line overrides, then validation.
    fn into_config(self) -> Result<RelayConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => RelayConfig::default(),
        };

        if let Some(port) = self.port {
            config.listener.port = port;
        }
        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(backend) = self.backend {
            config.backend.origin = backend;
        }
        if let Some(timeout) = self.timeout {
            config.backend.timeout_secs = timeout;
        }
        if self.quiet {
            config.observability.show_responses = false;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!("cors-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        listen = %config.listener.socket_address(),
        backend = %config.backend.origin,
        timeout_secs = config.backend.timeout_secs,
        show_responses = config.observability.show_responses,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(config.listener.socket_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = RelayServer::new(config);
    let server_shutdown = shutdown.subscribe();

    let mut server_task = tokio::spawn(server.run(listener, server_shutdown));

    tokio::select! {
        result = &mut server_task => {
            result??;
        }
        _ = wait_for_termination() => {
            shutdown.trigger();
            server_task.await??;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
