//! SearXNG MCP Library
//!
//! Exposes a SearXNG metasearch instance as MCP tools: general, image and news
//! search, plus the instance's engine configuration.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use searxng_mcp::{config::SearXNGConfig, SearXNGMcpServer};
//!
//! let server = SearXNGMcpServer::from_config(&SearXNGConfig::default())?;
//! // Serve via stdio or streamable HTTP, or call tools in-process
//! ```
//!
//! # Configuration
//! Set `SEARXNG_URL` or pass `--searxng`, or configure in
//! `~/.config/searxng-mcp/config.toml`

pub mod args;
pub mod backends;
pub mod config;
pub mod error;
pub mod handlers;
pub mod params;
pub mod server;
pub mod types;

// Re-export main server type
pub use server::SearXNGMcpServer;

// Re-export parameter and result types for direct API usage
pub use backends::{SearXNGBackend, SearchBackend};
pub use error::{SearchError, ToolError};
pub use params::{ImageSearchToolParams, NewsSearchToolParams, SearchToolParams};
pub use types::{EngineConfig, SearchParams, SearchResponse, SearchResult};
