//! Serve command handler.

use anyhow::Result;
use ekitrans_axum::{ServerConfig, start_server};

/// Run the HTTP API until the process is stopped.
///
/// `port` overrides `EKITRANS_PORT`.
pub async fn execute(port: Option<u16>, config: ServerConfig) -> Result<()> {
    let config = match port {
        Some(port) => config.with_port(port),
        None => config,
    };
    println!("Starting ekitrans API on port {}", config.port);
    start_server(config).await
}
