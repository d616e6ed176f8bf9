//! Integration tests for the connection token endpoint.

mod helpers;

use axum::http::StatusCode;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde_json::{Value, json};

use forum_api::AppState;

fn decode_claims(token: &str) -> Value {
    let validation = Validation::new(Algorithm::HS256);
    decode::<Value>(
        token,
        &DecodingKey::from_secret(helpers::TEST_SECRET.as_bytes()),
        &validation,
    )
    .expect("token should verify with the shared secret")
    .claims
}

fn now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

#[tokio::test]
async fn test_anonymous_visitor_gets_empty_subject() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/centrifugo/token/", None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.body["token"].as_str().expect("token field");
    let claims = decode_claims(token);
    assert_eq!(claims["sub"], "");
    assert!(claims.get("channel").is_none());
}

fn session_token(secret: &str, sub: &str) -> String {
    encode(
        &Header::default(),
        &json!({"sub": sub, "exp": now() + 3600}),
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

async fn subject_for(app: &helpers::TestApp, headers: &[(&str, &str)]) -> Value {
    let response = app.request("GET", "/centrifugo/token/", None, headers).await;
    assert_eq!(response.status, StatusCode::OK);
    decode_claims(response.body["token"].as_str().unwrap())["sub"].clone()
}

#[tokio::test]
async fn test_proxied_user_is_subject() {
    let app = helpers::TestApp::new();

    let sub = subject_for(
        &app,
        &[
            ("x-forum-user-id", "42"),
            ("x-forum-proxy-key", helpers::TEST_PROXY_KEY),
        ],
    )
    .await;

    assert_eq!(sub, "42");
}

#[tokio::test]
async fn test_spoofed_user_header_is_anonymous() {
    let app = helpers::TestApp::new();

    assert_eq!(subject_for(&app, &[("x-forum-user-id", "1")]).await, "");
    assert_eq!(
        subject_for(
            &app,
            &[("x-forum-user-id", "1"), ("x-forum-proxy-key", "guessed")],
        )
        .await,
        ""
    );
}

#[tokio::test]
async fn test_user_header_ignored_without_proxy_key_configured() {
    let mut config = helpers::base_config();
    config.auth.proxy_key = String::new();
    let app = helpers::TestApp::from_config(config);

    let sub = subject_for(
        &app,
        &[("x-forum-user-id", "1"), ("x-forum-proxy-key", "")],
    )
    .await;

    assert_eq!(sub, "");
}

#[tokio::test]
async fn test_session_token_user_is_subject() {
    let app = helpers::TestApp::new();
    let bearer = format!(
        "Bearer {}",
        session_token(helpers::TEST_SESSION_SECRET, "7")
    );

    let sub = subject_for(&app, &[("authorization", bearer.as_str())]).await;

    assert_eq!(sub, "7");
}

#[tokio::test]
async fn test_forged_session_token_is_anonymous() {
    let app = helpers::TestApp::new();
    let bearer = format!("Bearer {}", session_token("attacker-secret", "7"));

    let sub = subject_for(&app, &[("authorization", bearer.as_str())]).await;

    assert_eq!(sub, "");
}

#[tokio::test]
async fn test_identity_header_not_allowed_cross_origin() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "OPTIONS",
            "/centrifugo/token/",
            None,
            &[
                ("origin", "https://evil.example"),
                ("access-control-request-method", "GET"),
                ("access-control-request-headers", "x-forum-user-id"),
            ],
        )
        .await;

    let allowed = response
        .headers
        .get("access-control-allow-headers")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();
    assert_ne!(allowed, "*");
    assert!(!allowed.contains("x-forum-user-id"));
    assert!(!allowed.contains("x-forum-proxy-key"));
}

#[tokio::test]
async fn test_expiry_follows_configured_ttl() {
    let mut config = helpers::base_config();
    config.centrifuge.token_ttl_seconds = 120;
    let app = helpers::TestApp::from_config(config);

    let before = now();
    let response = app.request("GET", "/centrifugo/token/", None, &[]).await;
    let after = now();

    let exp = decode_claims(response.body["token"].as_str().unwrap())["exp"]
        .as_i64()
        .unwrap();
    assert!(exp >= before + 120 && exp <= after + 120);
}

#[tokio::test]
async fn test_token_rejected_with_other_secret() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/centrifugo/token/", None, &[]).await;
    let token = response.body["token"].as_str().unwrap();

    let result = decode::<Value>(
        token,
        &DecodingKey::from_secret(b"some-other-secret"),
        &Validation::new(Algorithm::HS256),
    );
    assert!(result.is_err());
}

#[tokio::test]
async fn test_blank_user_header_is_anonymous() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "GET",
            "/centrifugo/token/",
            None,
            &[
                ("x-forum-user-id", "   "),
                ("x-forum-proxy-key", helpers::TEST_PROXY_KEY),
            ],
        )
        .await;

    let claims = decode_claims(response.body["token"].as_str().unwrap());
    assert_eq!(claims["sub"], "");
}

#[test]
fn test_missing_secret_refuses_to_start() {
    let mut config = helpers::base_config();
    config.centrifuge.secret = String::new();

    let err = AppState::from_config(config).unwrap_err();
    assert!(err.is_configuration());
}
