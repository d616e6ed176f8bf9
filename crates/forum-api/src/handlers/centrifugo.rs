//! Broker handlers: connection tokens, front-end settings, internal notify.

use axum::Json;
use axum::extract::State;

use crate::dto::request::NotifyRequest;
use crate::dto::response::{BrokerSettingsResponse, NotifyResponse, TokenResponse};
use crate::error::ApiError;
use crate::extractors::{ApiJson, InternalCaller, Viewer};
use crate::state::AppState;

/// GET /centrifugo/token/
pub async fn connection_token(
    State(state): State<AppState>,
    viewer: Viewer,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state.token_issuer.issue_connection_token(viewer.subject())?;
    Ok(Json(TokenResponse { token }))
}

/// GET /centrifugo/settings/
pub async fn settings(State(state): State<AppState>) -> Json<BrokerSettingsResponse> {
    Json(BrokerSettingsResponse {
        enabled: state.publisher.gateway().is_enabled(),
        ws_url: state.broker_urls.ws_url(),
    })
}

/// POST /centrifugo/notify/
///
/// Malformed bodies are `VALIDATION` errors. Once the request is valid it
/// always answers 200; `delivered` reports whether the broker took the event.
pub async fn notify(
    State(state): State<AppState>,
    _caller: InternalCaller,
    ApiJson(req): ApiJson<NotifyRequest>,
) -> Result<Json<NotifyResponse>, ApiError> {
    if req.event_type.trim().is_empty() {
        return Err(forum_core::AppError::validation("event_type must not be empty").into());
    }

    let channel = req.owner_type.make_channel_name(req.owner_id);
    let delivered = state
        .publisher
        .notify(&req.event_type, req.owner_type, req.owner_id, req.payload)
        .await;

    Ok(Json(NotifyResponse { channel, delivered }))
}
