//! MCP Server implementation for SearXNG search
//!
//! This module declares the four search tools. Handler implementations are in
//! the handlers module; the backend is injected so any [`SearchBackend`] can
//! sit behind the tools.

use mcp_common::{
    async_trait, text_success, EmbeddableError, EmbeddableMcp, EmbeddableResult, McpError,
    ResultExt,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use serde_json::Value;
use std::sync::Arc;

use crate::backends::{SearXNGBackend, SearchBackend};
use crate::config::SearXNGConfig;
use crate::error::SearchError;
use crate::handlers;
use crate::params::{ImageSearchToolParams, NewsSearchToolParams, SearchToolParams};

const INSTRUCTIONS: &str = "SearXNG MCP Server - search the web through a SearXNG \
    metasearch instance. Supports general, image and news search, and can list the \
    engines and categories the instance offers. Results are returned as JSON text.";

/// The main SearXNG MCP Server
#[derive(Clone)]
pub struct SearXNGMcpServer {
    backend: Arc<dyn SearchBackend>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router - Each tool delegates to its handler
// ============================================================================

#[tool_router]
impl SearXNGMcpServer {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            backend,
            tool_router: Self::tool_router(),
        }
    }

    /// Server backed by a SearXNG instance
    pub fn from_config(config: &SearXNGConfig) -> Result<Self, SearchError> {
        tracing::info!("Using SearXNG instance: {}", config.url);
        let backend = SearXNGBackend::new(config)?;
        Ok(Self::new(Arc::new(backend)))
    }

    #[tool(
        description = "Search information through SearXNG. Supports various categories and search engines."
    )]
    async fn searxng_search(
        &self,
        Parameters(params): Parameters<SearchToolParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::general_search(self.backend.as_ref(), params)
            .await
            .map(text_success)
            .to_mcp_err()
    }

    #[tool(description = "Specialized image search through SearXNG")]
    async fn searxng_image_search(
        &self,
        Parameters(params): Parameters<ImageSearchToolParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::image_search(self.backend.as_ref(), params)
            .await
            .map(text_success)
            .to_mcp_err()
    }

    #[tool(description = "Specialized news search through SearXNG")]
    async fn searxng_news_search(
        &self,
        Parameters(params): Parameters<NewsSearchToolParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::news_search(self.backend.as_ref(), params)
            .await
            .map(text_success)
            .to_mcp_err()
    }

    #[tool(description = "Get information about available SearXNG search engines and categories")]
    async fn searxng_engines_info(&self) -> Result<CallToolResult, McpError> {
        handlers::engines_info(self.backend.as_ref())
            .await
            .map(text_success)
            .to_mcp_err()
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for SearXNGMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

fn decode<T: serde::de::DeserializeOwned>(params: Value) -> EmbeddableResult<T> {
    serde_json::from_value(params).map_err(|e| EmbeddableError::InvalidParams(e.to_string()))
}

#[async_trait]
impl EmbeddableMcp for SearXNGMcpServer {
    fn server_name(&self) -> &str {
        "searxng"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "searxng_search" => self
                .searxng_search(Parameters(decode(params)?))
                .await
                .map_err(Into::into),

            "searxng_image_search" => self
                .searxng_image_search(Parameters(decode(params)?))
                .await
                .map_err(Into::into),

            "searxng_news_search" => self
                .searxng_news_search(Parameters(decode(params)?))
                .await
                .map_err(Into::into),

            "searxng_engines_info" => self.searxng_engines_info().await.map_err(Into::into),

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
