//! Stub SearXNG instance for integration tests

#![allow(dead_code)]

use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Router,
};
use searxng_mcp::config::SearXNGConfig;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A request as the stub saw it
#[derive(Debug, Clone)]
pub struct Captured {
    pub path: &'static str,
    pub query: Option<String>,
    pub headers: HeaderMap,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    delay: Duration,
    requests: Arc<Mutex<Vec<Captured>>>,
}

pub struct StubSearXNG {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<Captured>>>,
}

impl StubSearXNG {
    /// Serve `body` with `status` for both `/search` and `/config`
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        Self::start_delayed(status, body, Duration::ZERO).await
    }

    /// Like [`StubSearXNG::start`], but every response waits `delay` first
    pub async fn start_delayed(status: u16, body: impl Into<String>, delay: Duration) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
            delay,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/search", get(search))
            .route("/config", get(config))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, requests }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn config(&self) -> SearXNGConfig {
        SearXNGConfig {
            url: self.url(),
            ..SearXNGConfig::default()
        }
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.requests.lock().unwrap().clone()
    }
}

async fn respond(
    state: &StubState,
    path: &'static str,
    query: Option<String>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    state.requests.lock().unwrap().push(Captured {
        path,
        query,
        headers,
    });
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    (state.status, state.body.clone())
}

async fn search(
    State(state): State<StubState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> (StatusCode, String) {
    respond(&state, "/search", query, headers).await
}

async fn config(
    State(state): State<StubState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> (StatusCode, String) {
    respond(&state, "/config", query, headers).await
}

pub const EMPTY_RESULTS: &str = r#"{"query":"cats","number_of_results":0,"results":[]}"#;

pub const TWO_RESULTS: &str = r#"{
    "query": "rust",
    "number_of_results": 2,
    "results": [
        {"title": "Rust", "url": "https://www.rust-lang.org", "content": "A language", "engine": "google", "score": 1.5},
        {"title": "Crates", "url": "https://crates.io", "content": "Registry", "engine": "bing", "publishedDate": "2024-05-01"}
    ],
    "answers": [],
    "corrections": [],
    "infoboxes": [],
    "suggestions": ["rust lang"]
}"#;
