//! Full MCP sessions over an in-memory transport, backed by a stub SearXNG

mod common;

use common::{StubSearXNG, TWO_RESULTS};
use rmcp::model::{CallToolRequestParam, CallToolResult, ErrorCode, RawContent};
use rmcp::service::{RoleClient, RunningService};
use rmcp::ServiceExt;
use searxng_mcp::SearXNGMcpServer;
use serde_json::{json, Value};

async fn connect(stub: &StubSearXNG) -> RunningService<RoleClient, ()> {
    let server = SearXNGMcpServer::from_config(&stub.config()).unwrap();
    let (server_io, client_io) = tokio::io::duplex(4096);

    tokio::spawn(async move {
        let service = server.serve(server_io).await.unwrap();
        let _ = service.waiting().await;
    });

    ().serve(client_io).await.unwrap()
}

async fn call(
    client: &RunningService<RoleClient, ()>,
    name: &str,
    arguments: Value,
) -> Result<CallToolResult, rmcp::ServiceError> {
    client
        .call_tool(CallToolRequestParam {
            name: name.to_string().into(),
            arguments: arguments.as_object().cloned(),
            task: None,
        })
        .await
}

fn text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .find_map(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.clone()),
            _ => None,
        })
        .unwrap()
}

#[tokio::test]
async fn test_lists_four_tools() {
    let stub = StubSearXNG::start(200, TWO_RESULTS).await;
    let client = connect(&stub).await;

    let mut names: Vec<String> = client
        .list_all_tools()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name.to_string())
        .collect();
    names.sort_unstable();

    assert_eq!(
        names,
        [
            "searxng_engines_info",
            "searxng_image_search",
            "searxng_news_search",
            "searxng_search"
        ]
    );

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_search_returns_summary() {
    let stub = StubSearXNG::start(200, TWO_RESULTS).await;
    let client = connect(&stub).await;

    let result = call(&client, "searxng_search", json!({ "query": "rust" }))
        .await
        .unwrap();
    assert!(!result.is_error.unwrap_or(false));

    let payload: Value = serde_json::from_str(&text(&result)).unwrap();
    assert_eq!(payload["query"], "rust");
    assert_eq!(payload["number_of_results"], 2);
    assert_eq!(payload["results"][0]["url"], "https://www.rust-lang.org");
    assert_eq!(payload["suggestions"], json!(["rust lang"]));
    assert!(payload.get("answers").is_none());
    assert!(payload.get("infoboxes").is_none());

    let requests = stub.requests();
    assert_eq!(
        requests[0].query.as_deref(),
        Some("q=rust&format=json&categories=general&engines=google&language=en")
    );

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_image_and_news_defaults_reach_searxng() {
    let stub = StubSearXNG::start(200, TWO_RESULTS).await;
    let client = connect(&stub).await;

    call(&client, "searxng_image_search", json!({ "query": "owls" }))
        .await
        .unwrap();
    call(
        &client,
        "searxng_news_search",
        json!({ "query": "elections", "time_range": "week", "page": 2 }),
    )
    .await
    .unwrap();

    let requests = stub.requests();
    assert_eq!(
        requests[0].query.as_deref(),
        Some("q=owls&format=json&categories=images&engines=google+images&language=en")
    );
    assert_eq!(
        requests[1].query.as_deref(),
        Some("q=elections&format=json&categories=news&engines=google+news&language=en&pageno=2&time_range=week")
    );

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_engines_info_passes_config_through() {
    let stub = StubSearXNG::start(200, r#"{"engines":{"google":{}}}"#).await;
    let client = connect(&stub).await;

    let result = call(&client, "searxng_engines_info", json!({}))
        .await
        .unwrap();

    assert_eq!(text(&result), "{\n  \"engines\": {\n    \"google\": {}\n  }\n}");
    assert_eq!(stub.requests()[0].path, "/config");

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_upstream_failure_is_internal_error() {
    let stub = StubSearXNG::start(500, "upstream error").await;
    let client = connect(&stub).await;

    let err = call(&client, "searxng_search", json!({ "query": "cats" }))
        .await
        .unwrap_err();

    match err {
        rmcp::ServiceError::McpError(data) => {
            assert_eq!(data.code, ErrorCode::INTERNAL_ERROR);
            assert!(data.message.contains("HTTP error 500: upstream error"));
        }
        other => panic!("expected an MCP error, got {:?}", other),
    }

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_missing_query_never_reaches_searxng() {
    let stub = StubSearXNG::start(200, TWO_RESULTS).await;
    let client = connect(&stub).await;

    let err = call(&client, "searxng_search", json!({ "engines": "bing" }))
        .await
        .unwrap_err();

    match err {
        rmcp::ServiceError::McpError(data) => assert_eq!(data.code, ErrorCode::INVALID_PARAMS),
        other => panic!("expected an MCP error, got {:?}", other),
    }
    assert!(stub.requests().is_empty());

    client.cancel().await.unwrap();
}
