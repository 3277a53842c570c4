//! SearXNG MCP Server
//!
//! Serves the SearXNG search tools over stdio or streamable HTTP.
//!
//! # Configuration
//! Flags and environment variables override `~/.config/searxng-mcp/config.toml`.

use clap::Parser;
use std::path::PathBuf;

use searxng_mcp::config::{Config, Transport};
use searxng_mcp::SearXNGMcpServer;

#[derive(Parser)]
#[command(name = "searxng-mcp")]
#[command(about = "MCP server for searching through a SearXNG instance")]
#[command(version)]
struct Cli {
    /// Transport type
    #[arg(short = 't', long, env = "SEARXNG_MCP_TRANSPORT", value_enum)]
    transport: Option<Transport>,

    /// Host to listen on in HTTP mode
    #[arg(long, env = "SEARXNG_MCP_HOST")]
    host: Option<String>,

    /// Port to listen on in HTTP mode
    #[arg(short = 'p', long, env = "SEARXNG_MCP_PORT")]
    port: Option<u16>,

    /// SearXNG instance URL
    #[arg(long = "searxng", env = "SEARXNG_URL")]
    searxng_url: Option<String>,

    /// Path to a TOML config file
    #[arg(short = 'c', long, env = "SEARXNG_MCP_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(transport) = self.transport {
            config.server.transport = transport;
        }
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = self.searxng_url {
            config.searxng.url = url;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mcp_common::init_tracing("searxng_mcp")?;

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    tracing::info!(
        "Starting SearXNG MCP Server (transport: {:?})",
        config.server.transport
    );

    let server = SearXNGMcpServer::from_config(&config.searxng)?;

    match config.server.transport {
        Transport::Stdio => {
            mcp_common::serve_stdio(server).await?;
        }
        Transport::Http => {
            let addr = config.server.listen_addr()?;
            mcp_common::serve_http(server, addr, &config.server.path).await?;
        }
    }

    tracing::info!("Server shutting down");
    Ok(())
}
