//! Error types for the SearXNG client and the tool handlers

use mcp_common::{internal_error, invalid_params, IntoMcpError, McpError};
use thiserror::Error;

/// Errors from a single round trip to the SearXNG backend
#[derive(Error, Debug)]
pub enum SearchError {
    /// The request could not be sent, timed out, or its body could not be read
    #[error("error executing request: {0}")]
    Network(#[source] reqwest::Error),

    /// The backend answered with something other than 200 OK
    #[error("HTTP error {status}: {body}")]
    HttpStatus {
        /// HTTP status code returned by the backend
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The body is not JSON of the expected shape
    #[error("error parsing JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL does not parse
    #[error("invalid SearXNG URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Result type alias for backend operations
pub type BackendResult<T> = Result<T, SearchError>;

/// Errors surfaced to the tool caller
#[derive(Error, Debug)]
pub enum ToolError {
    /// A required argument is missing or has the wrong type
    #[error("{0}")]
    Input(String),

    /// The backend call failed
    #[error("{context}: {source}")]
    Search {
        context: &'static str,
        #[source]
        source: SearchError,
    },

    /// The payload could not be encoded
    #[error("result serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl ToolError {
    pub fn search(context: &'static str) -> impl FnOnce(SearchError) -> Self {
        move |source| ToolError::Search { context, source }
    }
}

impl IntoMcpError for ToolError {
    fn into_mcp_error(self) -> McpError {
        match self {
            ToolError::Input(message) => invalid_params(message),
            other => internal_error(other.to_string()),
        }
    }
}
