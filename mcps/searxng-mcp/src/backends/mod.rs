//! Search backend implementations
//!
//! Tool handlers talk to the backend through the [`SearchBackend`] trait so
//! they can run against a stub in tests. SearXNG is the only real backend.

use async_trait::async_trait;

use crate::error::BackendResult;
use crate::types::{EngineConfig, SearchParams, SearchResponse};

pub mod searxng;

pub use searxng::SearXNGBackend;

/// Trait for search backends
///
/// Each call is a single request/response round trip with no retries.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Get the name of this backend
    fn name(&self) -> &str;

    /// Run a search and decode the full response
    async fn search(&self, params: &SearchParams) -> BackendResult<SearchResponse>;

    /// Fetch the backend's engine and category configuration
    async fn engines(&self) -> BackendResult<EngineConfig>;
}
