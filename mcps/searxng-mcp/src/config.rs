//! Configuration loading for searxng-mcp
//!
//! Settings are resolved in this order (later wins):
//! 1. Default values
//! 2. TOML file (`--config`, `SEARXNG_MCP_CONFIG`, or
//!    `~/.config/searxng-mcp/config.toml` if it exists)
//! 3. Environment variables and command line flags (see `main.rs`)

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// MCP transport configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// SearXNG backend configuration
    #[serde(default)]
    pub searxng: SearXNGConfig,
}

/// How the MCP server is exposed
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// JSON-RPC over stdin/stdout
    Stdio,
    /// Streamable HTTP on a listening socket
    #[default]
    #[serde(alias = "sse")]
    #[value(alias = "sse")]
    Http,
}

/// Listening server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub transport: Transport,
    /// Host to bind in HTTP mode
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind in HTTP mode
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path the MCP endpoint is mounted under
    #[serde(default = "default_path")]
    pub path: String,
}

/// SearXNG configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearXNGConfig {
    /// SearXNG instance URL
    #[serde(default = "default_searxng_url")]
    pub url: String,
    /// Total timeout per backend request, must be at least 1
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// User-Agent sent to the backend
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8892
}

fn default_path() -> String {
    "/mcp".to_string()
}

fn default_searxng_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "MCP-SearXNG-Client/1.0".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: Transport::default(),
            host: default_host(),
            port: default_port(),
            path: default_path(),
        }
    }
}

impl Default for SearXNGConfig {
    fn default() -> Self {
        Self {
            url: default_searxng_url(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ServerConfig {
    /// Socket address for HTTP mode
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("invalid listen host '{}'", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Config {
    /// Load configuration from `explicit` path, the default file, or defaults
    ///
    /// An explicitly named file must exist; the default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("config file not found: {}", path.display());
                }
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    tracing::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.searxng.timeout_seconds == 0 {
            bail!("searxng.timeout_seconds must be at least 1");
        }
        Ok(())
    }

    /// `~/.config/searxng-mcp/config.toml`
    fn default_path() -> Option<PathBuf> {
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("searxng-mcp")
                .join("config.toml")
        })
    }
}
