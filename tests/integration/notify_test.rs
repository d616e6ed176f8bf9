//! Integration tests for the internal notify endpoint.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn notify_body() -> serde_json::Value {
    json!({
        "event_type": "new_answer",
        "owner_type": "question",
        "owner_id": 42,
        "payload": {"answer_id": 7, "text": "Use a borrow"},
    })
}

#[tokio::test]
async fn test_disabled_broker_reports_not_delivered() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/centrifugo/notify/", Some(notify_body()), &[])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["channel"], "question:42");
    assert_eq!(response.body["delivered"], false);
}

#[tokio::test]
async fn test_event_is_published_to_question_channel() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/publish"))
        .and(header("X-API-Key", helpers::TEST_API_KEY))
        .and(body_json(json!({
            "channel": "question:42",
            "data": {
                "type": "new_answer",
                "payload": {"answer_id": 7, "text": "Use a borrow"},
            },
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let app = helpers::TestApp::with_broker(&server.uri());
    let response = app
        .request("POST", "/centrifugo/notify/", Some(notify_body()), &[])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["delivered"], true);
}

#[tokio::test]
async fn test_broker_failure_still_answers_ok() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/publish"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = helpers::TestApp::with_broker(&server.uri());
    let response = app
        .request("POST", "/centrifugo/notify/", Some(notify_body()), &[])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["delivered"], false);
}

#[tokio::test]
async fn test_internal_key_required_when_configured() {
    let mut config = helpers::base_config();
    config.server.internal_api_key = "backend-key".to_string();
    let app = helpers::TestApp::from_config(config);

    let missing = app
        .request("POST", "/centrifugo/notify/", Some(notify_body()), &[])
        .await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.body["error"], "UNAUTHORIZED");

    let wrong = app
        .request(
            "POST",
            "/centrifugo/notify/",
            Some(notify_body()),
            &[("x-internal-key", "nope")],
        )
        .await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);

    let ok = app
        .request(
            "POST",
            "/centrifugo/notify/",
            Some(notify_body()),
            &[("x-internal-key", "backend-key")],
        )
        .await;
    assert_eq!(ok.status, StatusCode::OK);
}

#[tokio::test]
async fn test_empty_event_type_is_rejected() {
    let app = helpers::TestApp::new();
    let mut body = notify_body();
    body["event_type"] = json!("  ");

    let response = app
        .request("POST", "/centrifugo/notify/", Some(body), &[])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_unknown_owner_type_is_validation_error() {
    let app = helpers::TestApp::new();
    let mut body = notify_body();
    body["owner_type"] = json!("tag");

    let response = app
        .request("POST", "/centrifugo/notify/", Some(body), &[])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
    assert!(response.body["message"].as_str().is_some());
}

#[tokio::test]
async fn test_negative_owner_id_is_validation_error() {
    let app = helpers::TestApp::new();
    let mut body = notify_body();
    body["owner_id"] = json!(-5);

    let response = app
        .request("POST", "/centrifugo/notify/", Some(body), &[])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}
