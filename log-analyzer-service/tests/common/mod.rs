//! Test helpers: application spawning and a fake Gemini upstream.

#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    Json, Router,
};
use log_analyzer_service::config::AnalyzerConfig;
use log_analyzer_service::services::providers::TextProvider;
use log_analyzer_service::startup::Application;
use serde_json::Value;
use service_core::config::Config;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Config bound to an ephemeral localhost port, built from `vars`.
pub fn test_config(vars: &[(&str, &str)]) -> AnalyzerConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let common = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        log_level: "error".to_string(),
    };
    AnalyzerConfig::from_lookup(common, |key| vars.get(key).cloned())
        .expect("Failed to build test config")
}

/// Spawn the application with `provider` and return its port.
pub async fn spawn_app_with_provider(provider: Arc<dyn TextProvider>) -> u16 {
    let config = test_config(&[("GOOGLE_API_KEY", "test-api-key")]);
    let app = Application::build_with_provider(config, provider)
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    port
}

/// Spawn the application wired to the real Gemini client, pointed at `base_url`.
pub async fn spawn_app_against(base_url: &str) -> u16 {
    let config = test_config(&[
        ("GOOGLE_API_KEY", "test-api-key"),
        ("GEMINI_API_BASE_URL", base_url),
        ("GENAI_TEXT_MODEL", "gemini-test"),
        ("GENAI_REQUEST_TIMEOUT_SECS", "5"),
    ]);
    let app = Application::build(config)
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    port
}

/// A request the fake upstream received.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub path: String,
    pub api_key: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct FakeState {
    status: StatusCode,
    reply: Value,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

/// In-process stand-in for the Gemini REST API.
pub struct FakeGemini {
    pub base_url: String,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl FakeGemini {
    /// Start a server answering every request with `status` and `reply`.
    pub async fn start(status: StatusCode, reply: Value) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            status,
            reply,
            received: received.clone(),
        };

        let router = Router::new().fallback(record_and_reply).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake upstream");
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self {
            base_url: format!("http://127.0.0.1:{}/v1beta", port),
            received,
        }
    }

    /// Gemini-shaped success body with a single text candidate.
    pub fn text_reply(text: &str) -> Value {
        serde_json::json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }],
            "usageMetadata": {
                "promptTokenCount": 42,
                "candidatesTokenCount": 7,
                "totalTokenCount": 49
            }
        })
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }
}

async fn record_and_reply(
    State(state): State<FakeState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let request = ReceivedRequest {
        path: uri.path().to_string(),
        api_key: headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    };
    state.received.lock().unwrap().push(request);

    (state.status, Json(state.reply))
}

/// A localhost URL with nothing listening on it.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/v1beta", port)
}
