//! Broker URL derivation.
//!
//! Pure string transforms over `host` and `url_prefix`; nothing here touches
//! the network.

use forum_core::config::CentrifugeConfig;

/// Path of the broker's WebSocket endpoint, relative to the HTTP base.
pub const WEBSOCKET_PATH: &str = "/connection/websocket";

/// Path of the administrative API, relative to the HTTP base.
pub const API_PATH: &str = "/api";

/// Derived broker endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerUrls {
    http_base: String,
}

impl BrokerUrls {
    /// Derives endpoints from `host` and an optional path `prefix`.
    pub fn new(host: &str, prefix: &str) -> Self {
        let host = host.trim_end_matches('/');
        let prefix = prefix.trim_matches('/');
        let http_base = if prefix.is_empty() {
            host.to_string()
        } else {
            format!("{host}/{prefix}")
        };
        Self {
            http_base: http_base.trim_end_matches('/').to_string(),
        }
    }

    /// Derives endpoints from broker configuration.
    pub fn from_config(config: &CentrifugeConfig) -> Self {
        Self::new(&config.host, &config.url_prefix)
    }

    /// HTTP base URL of the broker, without a trailing slash.
    pub fn http_base(&self) -> &str {
        &self.http_base
    }

    /// Administrative API URL.
    pub fn api_url(&self) -> String {
        format!("{}{API_PATH}", self.http_base)
    }

    /// WebSocket URL browsers connect to.
    ///
    /// `https` becomes `wss`, `http` becomes `ws`; any other scheme is kept.
    pub fn ws_url(&self) -> String {
        let ws = if let Some(rest) = self.http_base.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = self.http_base.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            self.http_base.clone()
        };
        format!("{}{WEBSOCKET_PATH}", ws.trim_end_matches('/'))
    }
}
