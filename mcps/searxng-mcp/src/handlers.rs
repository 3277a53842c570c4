//! Handler implementations for searxng-mcp tools
//!
//! Each handler validates the query, applies the tool's defaults, calls the
//! backend once and renders the result as pretty-printed JSON text.

use serde::Serialize;

use crate::args::Arg;
use crate::backends::SearchBackend;
use crate::error::ToolError;
use crate::params::{ImageSearchToolParams, NewsSearchToolParams, SearchToolParams};
use crate::types::{SearchParams, SearchResponse, SearchResult};

const GENERAL: (&str, &str) = ("general", "google");
const IMAGES: (&str, &str) = ("images", "google images");
const NEWS: (&str, &str) = ("news", "google news");

/// Curated view of a general search; infoboxes are never surfaced
#[derive(Debug, Serialize)]
pub struct SearchSummary<'a> {
    pub query: &'a str,
    pub number_of_results: i64,
    pub results: &'a [SearchResult],
    #[serde(skip_serializing_if = "is_empty")]
    pub answers: &'a [String],
    #[serde(skip_serializing_if = "is_empty")]
    pub suggestions: &'a [String],
    #[serde(skip_serializing_if = "is_empty")]
    pub corrections: &'a [String],
}

impl<'a> From<&'a SearchResponse> for SearchSummary<'a> {
    fn from(response: &'a SearchResponse) -> Self {
        Self {
            query: &response.query,
            number_of_results: response.number_of_results,
            results: &response.results,
            answers: &response.answers,
            suggestions: &response.suggestions,
            corrections: &response.corrections,
        }
    }
}

fn is_empty(items: &&[String]) -> bool {
    items.is_empty()
}

fn required_query(query: Arg<String>) -> Result<String, ToolError> {
    query
        .ok()
        .ok_or_else(|| ToolError::Input("query must be a string".to_string()))
}

fn render<T: Serialize + ?Sized>(data: &T) -> Result<String, ToolError> {
    serde_json::to_string_pretty(data).map_err(ToolError::Serialization)
}

fn defaults(query: String, (category, engine): (&str, &str)) -> SearchParams {
    SearchParams::new(query, &[category], &[engine])
}

// ============================================================================
// Search Tools
// ============================================================================

pub fn general_params(params: SearchToolParams) -> Result<SearchParams, ToolError> {
    let mut search = defaults(required_query(params.query)?, GENERAL);

    if let Some(categories) = params.categories.list() {
        search.categories = categories;
    }
    if let Some(engines) = params.engines.list() {
        search.engines = engines;
    }
    if let Some(language) = params.language.non_empty() {
        search.language = language;
    }
    search.page_no = params.page.truncated();
    search.time_range = params.time_range.ok();
    search.safe_search = params.safe_search.truncated();

    Ok(search)
}

pub fn image_params(params: ImageSearchToolParams) -> Result<SearchParams, ToolError> {
    let mut search = defaults(required_query(params.query)?, IMAGES);

    if let Some(engines) = params.engines.list() {
        search.engines = engines;
    }
    search.page_no = params.page.truncated();

    Ok(search)
}

pub fn news_params(params: NewsSearchToolParams) -> Result<SearchParams, ToolError> {
    let mut search = defaults(required_query(params.query)?, NEWS);

    search.time_range = params.time_range.ok();
    if let Some(language) = params.language.non_empty() {
        search.language = language;
    }
    search.page_no = params.page.truncated();

    Ok(search)
}

fn log_search(tool: &str, backend: &dyn SearchBackend, search: &SearchParams) {
    tracing::info!(
        "{} via {}: query={:?} categories={:?} engines={:?} language={} page={:?}",
        tool,
        backend.name(),
        search.query,
        search.categories,
        search.engines,
        search.language,
        search.page_no
    );
}

pub async fn general_search(
    backend: &dyn SearchBackend,
    params: SearchToolParams,
) -> Result<String, ToolError> {
    let search = general_params(params)?;
    log_search("searxng_search", backend, &search);

    let response = backend
        .search(&search)
        .await
        .map_err(ToolError::search("search error"))?;

    render(&SearchSummary::from(&response))
}

pub async fn image_search(
    backend: &dyn SearchBackend,
    params: ImageSearchToolParams,
) -> Result<String, ToolError> {
    let search = image_params(params)?;
    log_search("searxng_image_search", backend, &search);

    let response = backend
        .search(&search)
        .await
        .map_err(ToolError::search("image search error"))?;

    render(&response)
}

pub async fn news_search(
    backend: &dyn SearchBackend,
    params: NewsSearchToolParams,
) -> Result<String, ToolError> {
    let search = news_params(params)?;
    log_search("searxng_news_search", backend, &search);

    let response = backend
        .search(&search)
        .await
        .map_err(ToolError::search("news search error"))?;

    render(&response)
}

// ============================================================================
// Engine Info
// ============================================================================

pub async fn engines_info(backend: &dyn SearchBackend) -> Result<String, ToolError> {
    tracing::info!("searxng_engines_info");

    let config = backend
        .engines()
        .await
        .map_err(ToolError::search("error getting engines information"))?;

    render(&config)
}
