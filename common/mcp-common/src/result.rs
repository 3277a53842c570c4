//! Result helpers for MCP tool responses

use rmcp::model::{CallToolResult, Content};

/// Create a successful plain text response
///
/// Tools that render their own JSON hand the rendered text to this.
///
/// ```rust,ignore
/// handlers::search(&backend, params).await.map(text_success).to_mcp_err()
/// ```
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}
