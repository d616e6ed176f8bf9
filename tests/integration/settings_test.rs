//! Integration tests for the front-end settings and health endpoints.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_settings_expose_websocket_url() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/centrifugo/settings/", None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["enabled"], false);
    assert_eq!(
        response.body["ws_url"],
        "wss://rt.forum.test/centrifugo/connection/websocket"
    );
}

#[tokio::test]
async fn test_settings_report_enabled_broker() {
    let app = helpers::TestApp::with_broker("http://127.0.0.1:8000");

    let response = app.request("GET", "/centrifugo/settings/", None, &[]).await;

    assert_eq!(response.body["enabled"], true);
    assert_eq!(
        response.body["ws_url"],
        "ws://127.0.0.1:8000/connection/websocket"
    );
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/health", None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["broker_enabled"], false);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/centrifugo/unknown/", None, &[]).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
