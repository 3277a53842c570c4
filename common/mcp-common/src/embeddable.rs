//! Embeddable MCP trait for in-process execution
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly, without a
//! transport in between.
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use searxng_mcp::SearXNGMcpServer;
//!
//! let server = SearXNGMcpServer::from_config(&config.searxng)?;
//! let tools = server.list_tools();
//! let result = server
//!     .call_tool("searxng_search", serde_json::json!({ "query": "rust" }))
//!     .await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Error type for embeddable MCP operations
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// Tool was not found in the server
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Arguments did not decode into the tool's parameter type
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// The tool itself returned an MCP error
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

/// Result type for embeddable MCP operations
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// Trait for MCP servers that can be executed in-process
///
/// Servers built on `#[tool_router]` list their tools through
/// `self.tool_router.list_all()` and dispatch `call_tool` by name to the
/// generated tool methods.
///
/// Implementations must be `Send + Sync` so tools can be called from
/// concurrent tasks.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Returns the server name for identification
    fn server_name(&self) -> &str;

    /// Returns all available tools with their input schemas
    fn list_tools(&self) -> Vec<Tool>;

    /// Executes a tool by name with a JSON object of arguments
    ///
    /// Fails with [`EmbeddableError::ToolNotFound`] for an unknown name and
    /// [`EmbeddableError::InvalidParams`] when the arguments don't decode.
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }

    fn server_version(&self) -> Option<&str> {
        None
    }
}
