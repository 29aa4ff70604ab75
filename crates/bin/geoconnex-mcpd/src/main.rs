//! Daemon entry point for the Geoconnex MCP server.
//!
//! Loads configuration from the command line and environment, installs a
//! stderr log subscriber, and serves the MCP protocol over stdio and/or
//! streamable HTTP.

mod config;

use std::sync::Arc;

use geoconnex_core::GeoconnexClient;
use geoconnex_mcp::server::{serve_stdio, serve_streamable_http};
use tracing::{error, info};

use crate::config::GeoconnexConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = GeoconnexConfig::from_args()?;

    // stdout carries the stdio transport, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .init();

    info!(graph = %config.endpoints.graph, "starting geoconnex-mcpd");
    let client = Arc::new(GeoconnexClient::with_endpoints(config.endpoints.clone()));
    let http_config = config.http_server_config();

    match (config.enable_stdio, config.http_serve) {
        (true, true) => {
            let http_client = client.clone();
            let http = tokio::spawn(async move {
                if let Err(err) = serve_streamable_http(http_client, http_config).await {
                    error!(error = %err, "streamable HTTP server stopped");
                }
            });
            let result = serve_stdio(client).await;
            http.abort();
            result
        }
        (true, false) => serve_stdio(client).await,
        (false, true) => serve_streamable_http(client, http_config).await,
        (false, false) => Ok(()),
    }
}
