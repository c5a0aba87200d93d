//! Iris MCP server binary.

use anyhow::{Context, Result};
use clap::Parser;
use iris_client::{ComputerVisionClient, VisionConfig};
use iris_mcp::{ByteTransport, IrisRouter, Router, RouterService, Server, ToolRegistry};
use std::path::PathBuf;
use tokio::io::{stdin, stdout};
use tracing_subscriber::{self, EnvFilter};

/// MCP server exposing the Computer Vision API over stdio.
#[derive(Debug, Parser)]
#[command(name = "iris-mcp", version, about)]
struct Cli {
    /// Configuration file (TOML). Defaults to ./iris.toml when present.
    #[arg(short, long, env = "IRIS_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // stdout carries the protocol; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Iris MCP server");

    let config = match &cli.config {
        Some(path) => VisionConfig::load_from(path),
        None => VisionConfig::load(),
    }
    .context("Failed to load Computer Vision configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    let client = ComputerVisionClient::new(&config).context("Failed to build HTTP client")?;

    let router = IrisRouter::builder()
        .name("iris")
        .version(env!("CARGO_PKG_VERSION"))
        .tools(ToolRegistry::vision(client))
        .build();

    tracing::info!(tools = router.list_tools().len(), "Router initialized");

    let server = Server::new(RouterService(router));
    let transport = ByteTransport::new(stdin(), stdout());

    tracing::info!("Server ready, listening on stdio");
    server.run(transport).await?;

    Ok(())
}
