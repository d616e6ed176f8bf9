//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use forum_api::{AppState, build_app};
use forum_core::config::AppConfig;

/// Secret every test app signs tokens with.
pub const TEST_SECRET: &str = "integration-secret";

/// Secret the forum signs session tokens with in tests.
pub const TEST_SESSION_SECRET: &str = "integration-session-secret";

/// Key the trusted proxy sends with the user header in tests.
pub const TEST_PROXY_KEY: &str = "integration-proxy-key";

/// API key test apps send to the broker.
pub const TEST_API_KEY: &str = "integration-api-key";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// App with the broker switched off.
    pub fn new() -> Self {
        Self::from_config(base_config())
    }

    /// App publishing to a broker at `host` (usually a wiremock server).
    pub fn with_broker(host: &str) -> Self {
        let mut config = base_config();
        config.centrifuge.enabled = true;
        config.centrifuge.host = host.to_string();
        config.centrifuge.url_prefix = String::new();
        config.centrifuge.api_key = TEST_API_KEY.to_string();
        Self::from_config(config)
    }

    /// App built from an explicit configuration.
    pub fn from_config(config: AppConfig) -> Self {
        let state = AppState::from_config(config.clone()).expect("Failed to build app state");
        Self {
            router: build_app(state),
            config,
        }
    }

    /// Make a request with optional JSON body and extra headers.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Configuration shared by every test app: signing, session and proxy
/// secrets set, broker off.
pub fn base_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.centrifuge.secret = TEST_SECRET.to_string();
    config.centrifuge.host = "https://rt.forum.test".to_string();
    config.centrifuge.url_prefix = "centrifugo".to_string();
    config.auth.session_secret = TEST_SESSION_SECRET.to_string();
    config.auth.proxy_key = TEST_PROXY_KEY.to_string();
    config
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}
