//! MCP Common - Shared utilities for MCP servers
//!
//! - **Initialization**: tracing setup plus stdio and streamable HTTP serving
//! - **Results**: helpers for building `CallToolResult` responses
//! - **Errors**: traits for converting errors to MCP-compatible format
//! - **Embeddable**: [`EmbeddableMcp`] trait for in-process execution
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{init_tracing, serve_http, serve_stdio};
//!
//! init_tracing("my_mcp")?;
//! if stdio {
//!     serve_stdio(server).await?;
//! } else {
//!     serve_http(server, "0.0.0.0:8892".parse()?, "/mcp").await?;
//! }
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params, IntoMcpError, ResultExt};
pub use init::{http_service, init_tracing, serve_http, serve_stdio};
pub use result::text_success;

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
