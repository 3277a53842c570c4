//! Parameter definitions for searxng-mcp tools
//!
//! The schemas advertise plain strings and numbers. Decoding goes through
//! [`Arg`], so a mistyped optional argument is ignored rather than rejected.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::args::Arg;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchToolParams {
    #[schemars(with = "String", description = "Search query")]
    pub query: Arg<String>,
    #[serde(default)]
    #[schemars(
        with = "Option<String>",
        description = "Search categories (general, images, videos, news, music, files, science, it). Multiple values separated by comma"
    )]
    pub categories: Arg<String>,
    #[serde(default)]
    #[schemars(
        with = "Option<String>",
        description = "Search engines (google, bing, duckduckgo, yandex, etc.). Multiple values separated by comma"
    )]
    pub engines: Arg<String>,
    #[serde(default)]
    #[schemars(
        with = "Option<String>",
        description = "Search language (ru, en, de, fr, etc.)"
    )]
    pub language: Arg<String>,
    #[serde(default)]
    #[schemars(
        with = "Option<f64>",
        description = "Page number of results (default 1)"
    )]
    pub page: Arg<f64>,
    #[serde(default)]
    #[schemars(
        with = "Option<String>",
        description = "Time range (day, week, month, year)"
    )]
    pub time_range: Arg<String>,
    #[serde(default)]
    #[schemars(
        with = "Option<f64>",
        description = "Safe search (0 - disabled, 1 - moderate, 2 - strict)"
    )]
    pub safe_search: Arg<f64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ImageSearchToolParams {
    #[schemars(with = "String", description = "Search query for images")]
    pub query: Arg<String>,
    #[serde(default)]
    #[schemars(
        with = "Option<String>",
        description = "Image search engines (google images, bing images, flickr, etc.)"
    )]
    pub engines: Arg<String>,
    #[serde(default)]
    #[schemars(with = "Option<f64>", description = "Page number of results")]
    pub page: Arg<f64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct NewsSearchToolParams {
    #[schemars(with = "String", description = "Search query for news")]
    pub query: Arg<String>,
    #[serde(default)]
    #[schemars(
        with = "Option<String>",
        description = "Time range for news (day, week, month, year)"
    )]
    pub time_range: Arg<String>,
    #[serde(default)]
    #[schemars(with = "Option<String>", description = "News language")]
    pub language: Arg<String>,
    #[serde(default)]
    #[schemars(with = "Option<f64>", description = "Page number of results")]
    pub page: Arg<f64>,
}
