//! Response DTOs.

use serde::{Deserialize, Serialize};

/// `GET /centrifugo/token/` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed connection token.
    pub token: String,
}

/// `GET /centrifugo/settings/` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokerSettingsResponse {
    /// Whether real-time updates are switched on.
    pub enabled: bool,
    /// WebSocket URL the browser connects to.
    pub ws_url: String,
}

/// `POST /centrifugo/notify/` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyResponse {
    /// Channel the event was addressed to.
    pub channel: String,
    /// Whether the broker acknowledged the event.
    pub delivered: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Whether broker publishing is enabled.
    pub broker_enabled: bool,
}
