//! Error handling utilities for MCP servers
//!
//! Domain errors reach the caller as MCP `ErrorData`. Input problems become
//! `invalid_params`; everything else becomes `internal_error`.

use rmcp::ErrorData as McpError;

/// Trait for converting errors into MCP-compatible errors
///
/// Implement this for a server's own error type to pick the MCP error code
/// per variant, then use [`ResultExt::to_mcp_err`] in tool implementations.
///
/// ```rust,ignore
/// impl IntoMcpError for ToolError {
///     fn into_mcp_error(self) -> McpError {
///         match self {
///             ToolError::Input(message) => invalid_params(message),
///             other => internal_error(other.to_string()),
///         }
///     }
/// }
/// ```
pub trait IntoMcpError {
    /// Convert this error into an MCP error
    fn into_mcp_error(self) -> McpError;
}

impl IntoMcpError for serde_json::Error {
    fn into_mcp_error(self) -> McpError {
        internal_error(format!("JSON error: {}", self))
    }
}

impl IntoMcpError for anyhow::Error {
    fn into_mcp_error(self) -> McpError {
        internal_error(self.to_string())
    }
}

/// Extension trait for Result types to convert to MCP errors
pub trait ResultExt<T> {
    /// Convert the error to an MCP error
    fn to_mcp_err(self) -> Result<T, McpError>;
}

impl<T, E: IntoMcpError> ResultExt<T> for Result<T, E> {
    fn to_mcp_err(self) -> Result<T, McpError> {
        self.map_err(|e| e.into_mcp_error())
    }
}

/// Create an internal error with a message
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// Create an invalid params error with a message
///
/// Use this when the tool receives a missing or mistyped argument.
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_result_ext_keeps_ok() {
        let result: Result<u8, anyhow::Error> = Ok(7);
        assert_eq!(result.to_mcp_err().unwrap(), 7);
    }

    #[test]
    fn test_result_ext_converts_err() {
        let result: Result<(), anyhow::Error> = Err(anyhow::anyhow!("backend down"));
        let err = result.to_mcp_err().unwrap_err();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("backend down"));
    }

    #[test]
    fn test_json_error_is_internal() {
        let err = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into_mcp_error();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.starts_with("JSON error"));
    }

    #[test]
    fn test_invalid_params() {
        let err = invalid_params("query must be a string");
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("query must be a string"));
    }
}
