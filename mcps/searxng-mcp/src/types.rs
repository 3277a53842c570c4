//! Search request and response types
//!
//! `SearchParams` is what the tool handlers hand to a backend; the response
//! types mirror the JSON that SearXNG returns from `/search?format=json` and
//! are re-serialized as-is for the image and news tools.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Opaque payload of the backend's `/config` endpoint
pub type EngineConfig = Map<String, Value>;

/// Default search language for every search tool
pub const DEFAULT_LANGUAGE: &str = "en";

/// Structured parameters for a single `/search` call
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    /// Search terms, sent even when empty
    pub query: String,
    /// Category tags, comma-joined on the wire
    pub categories: Vec<String>,
    /// Engine identifiers, comma-joined on the wire
    pub engines: Vec<String>,
    /// Result language, omitted when empty
    pub language: String,
    /// Page number; zero or negative means unset
    pub page_no: Option<i64>,
    /// Time range filter (day, week, month, year), omitted when empty
    pub time_range: Option<String>,
    /// Safe search level; only 0..=2 is sent
    pub safe_search: Option<i64>,
}

impl SearchParams {
    /// Parameters for `query` with the given default categories and engines
    pub fn new(query: impl Into<String>, categories: &[&str], engines: &[&str]) -> Self {
        Self {
            query: query.into(),
            categories: categories.iter().map(|s| s.to_string()).collect(),
            engines: engines.iter().map(|s| s.to_string()).collect(),
            language: DEFAULT_LANGUAGE.to_string(),
            page_no: None,
            time_range: None,
            safe_search: None,
        }
    }
}

/// A single search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub engine: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(
        rename = "publishedDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub published_date: Option<String>,
    /// Full-size image URL (image results only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_src: Option<String>,
    /// Thumbnail URL (image and news results)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_src: Option<String>,
}

/// Decoded `/search` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub number_of_results: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<SearchResult>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub answers: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub corrections: Vec<String>,
    /// Infobox objects, never interpreted
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub infoboxes: Vec<Value>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub suggestions: Vec<String>,
}

// SearXNG emits `null` for fields it has no value for
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
