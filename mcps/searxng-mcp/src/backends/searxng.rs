//! SearXNG backend
//!
//! Implements the SearchBackend trait against a SearXNG instance's JSON API.
//! See: https://docs.searxng.org/dev/search_api.html

use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::SearchBackend;
use crate::config::SearXNGConfig;
use crate::error::{BackendResult, SearchError};
use crate::types::{EngineConfig, SearchParams, SearchResponse};

/// SearXNG backend
#[derive(Debug, Clone)]
pub struct SearXNGBackend {
    client: Client,
    base_url: String,
}

impl SearXNGBackend {
    pub fn new(config: &SearXNGConfig) -> BackendResult<Self> {
        let base_url = config.url.trim_end_matches('/').to_string();
        url::Url::parse(&base_url).map_err(|source| SearchError::InvalidBaseUrl {
            url: config.url.clone(),
            source,
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .build()
            .map_err(SearchError::Client)?;

        Ok(Self { client, base_url })
    }

    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> BackendResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(SearchError::Network)?;

        let body = read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Query pairs for `/search`, in wire order
///
/// Optional parameters are only present when they carry a value the backend
/// accepts; an out-of-range `safe_search` is dropped rather than rejected.
pub fn query_pairs(params: &SearchParams) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("q", params.query.clone()),
        ("format", "json".to_string()),
    ];

    if !params.categories.is_empty() {
        pairs.push(("categories", params.categories.join(",")));
    }

    if !params.engines.is_empty() {
        pairs.push(("engines", params.engines.join(",")));
    }

    if !params.language.is_empty() {
        pairs.push(("language", params.language.clone()));
    }

    if let Some(page) = params.page_no.filter(|page| *page > 0) {
        pairs.push(("pageno", page.to_string()));
    }

    if let Some(range) = params.time_range.as_deref().filter(|r| !r.is_empty()) {
        pairs.push(("time_range", range.to_string()));
    }

    if let Some(level) = params.safe_search.filter(|level| (0..=2).contains(level)) {
        pairs.push(("safesearch", level.to_string()));
    }

    pairs
}

// Anything but 200 is an error carrying the raw body
async fn read_body(response: Response) -> BackendResult<String> {
    let status = response.status();

    if status != StatusCode::OK {
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("Failed to read {} error body: {}", status, e);
                String::new()
            }
        };
        tracing::warn!("SearXNG returned {}", status);
        return Err(SearchError::HttpStatus {
            status: status.as_u16(),
            body,
        });
    }

    response.text().await.map_err(SearchError::Network)
}

#[async_trait]
impl SearchBackend for SearXNGBackend {
    fn name(&self) -> &str {
        "searxng"
    }

    async fn search(&self, params: &SearchParams) -> BackendResult<SearchResponse> {
        self.get_json("/search", &query_pairs(params)).await
    }

    async fn engines(&self) -> BackendResult<EngineConfig> {
        self.get_json("/config", &[]).await
    }
}
