//! `reqwest` transport for the broker's HTTP API.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::StatusCode;

use forum_core::config::CentrifugeConfig;
use forum_core::error::AppError;

use crate::urls::BrokerUrls;

use super::error::GatewayError;
use super::transport::{BrokerReply, BrokerTransport, PublishCommand};

/// Header carrying the broker API key.
const API_KEY_HEADER: &str = "X-API-Key";

/// Longest response body kept in error messages.
const MAX_ERROR_BODY: usize = 512;

/// Posts commands to `<api_url>/<method>` with the configured key and timeout.
#[derive(Clone)]
pub struct HttpBrokerTransport {
    client: Client,
    api_url: String,
    api_key: String,
}

impl std::fmt::Debug for HttpBrokerTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpBrokerTransport")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl HttpBrokerTransport {
    /// Creates a transport for an explicit API endpoint.
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(concat!("forum-realtime/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build broker client: {e}")))?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Creates a transport from broker configuration.
    pub fn from_config(config: &CentrifugeConfig) -> Result<Self, AppError> {
        config.validate_broker()?;
        let urls = BrokerUrls::from_config(config);
        Self::new(urls.api_url(), config.api_key.clone(), config.timeout())
    }

    /// The API endpoint commands are posted under.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn call<B: serde::Serialize + Sync>(
        &self,
        method: &str,
        body: &B,
    ) -> Result<BrokerReply, GatewayError> {
        let url = format!("{}/{method}", self.api_url);
        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(GatewayError::Unauthorized {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: truncate(&text, MAX_ERROR_BODY),
            });
        }

        serde_json::from_str(&text).map_err(|e| GatewayError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl BrokerTransport for HttpBrokerTransport {
    async fn publish(&self, command: &PublishCommand) -> Result<BrokerReply, GatewayError> {
        self.call("publish", command).await
    }
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}
