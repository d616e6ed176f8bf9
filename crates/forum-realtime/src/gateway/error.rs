//! Publish failure causes.

use thiserror::Error;

/// Why a publish attempt did not reach the broker or was rejected by it.
///
/// Internal to the gateway: callers of [`BrokerGateway::publish`] only see a
/// boolean.
///
/// [`BrokerGateway::publish`]: super::BrokerGateway::publish
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Publishing is switched off in configuration.
    #[error("broker publishing is disabled")]
    Disabled,

    /// The request did not complete within the configured timeout.
    #[error("broker request timed out")]
    Timeout,

    /// The broker could not be reached.
    #[error("broker connection failed: {0}")]
    Connection(String),

    /// The broker rejected the API key.
    #[error("broker rejected credentials (HTTP {status})")]
    Unauthorized {
        /// HTTP status code.
        status: u16,
    },

    /// The broker answered with a non-success HTTP status.
    #[error("broker returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// The broker's reply could not be understood.
    #[error("malformed broker reply: {0}")]
    MalformedResponse(String),

    /// The broker acknowledged the request with an error field set.
    #[error("broker error {code}: {message}")]
    Broker {
        /// Broker error code, 0 when the broker sent only a message.
        code: u32,
        /// Broker error message.
        message: String,
    },
}

impl GatewayError {
    /// Short machine-readable label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            GatewayError::Disabled => "disabled",
            GatewayError::Timeout => "timeout",
            GatewayError::Connection(_) => "connection",
            GatewayError::Unauthorized { .. } => "unauthorized",
            GatewayError::Status { .. } => "status",
            GatewayError::MalformedResponse(_) => "malformed_response",
            GatewayError::Broker { .. } => "broker",
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else if err.is_decode() {
            GatewayError::MalformedResponse(err.to_string())
        } else {
            GatewayError::Connection(err.to_string())
        }
    }
}
