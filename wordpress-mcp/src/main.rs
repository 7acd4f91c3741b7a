//! MCP Server entry point for WordPress.
//!
//! Reads the site URL and application password from the environment and
//! serves the tools over stdio.
//!
//! # Configuration
//!
//! - `WORDPRESS_API_URL`: site root, e.g. `https://example.com`
//! - `WORDPRESS_USERNAME`: account the application password belongs to
//! - `WORDPRESS_APPLICATION_PASSWORD`: application password
//! - `WORDPRESS_API_ROOT` *(optional)*: REST root path, default `/wp-json`
//! - `WORDPRESS_TIMEOUT_SECS` *(optional)*: per-request timeout

mod schemas;
mod server;
mod services;

use std::process::ExitCode;
use std::sync::Arc;

use rmcp::ServiceExt;
use server::{TOOL_COUNT, WordPressMcp};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordpress_mcp_client::{WpApi, WpClient, WpConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing to stderr (MCP uses stdout for protocol)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("Starting WordPress MCP Server");

    let config = match WpConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Using REST API at {}", config.api_base());

    let client = match WpClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let api: Arc<dyn WpApi> = Arc::new(client);

    let mcp_server = WordPressMcp::new(api);
    tracing::info!("MCP server initialized with {} tools", TOOL_COUNT);

    // Start serving via stdio
    tracing::info!("Starting MCP server on stdio transport");
    let service = match mcp_server.serve(rmcp::transport::stdio()).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start MCP server: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Wait for the server to complete
    if let Err(e) = service.waiting().await {
        tracing::error!("MCP server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
