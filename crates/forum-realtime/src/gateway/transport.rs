//! Transport seam between the gateway and the broker's administrative API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::GatewayError;

/// Body of the broker's `publish` command: `{"channel": ..., "data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishCommand {
    /// Target channel.
    pub channel: String,
    /// Publication data delivered to subscribers.
    pub data: Value,
}

/// Reply to an administrative API command.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BrokerReply {
    /// Error reported by the broker, if any.
    #[serde(default)]
    pub error: Option<BrokerErrorBody>,
    /// Command result.
    #[serde(default)]
    pub result: Option<Value>,
}

/// Error field of a broker reply.
///
/// The broker sends `{"code": ..., "message": ...}`; a bare string or any
/// other value is accepted too.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BrokerErrorBody {
    /// Structured error.
    Detailed {
        /// Error code.
        #[serde(default)]
        code: u32,
        /// Error message.
        #[serde(default)]
        message: String,
    },
    /// Plain error message.
    Message(String),
    /// Anything else.
    Other(Value),
}

impl BrokerErrorBody {
    /// Converts into a [`GatewayError::Broker`].
    pub fn into_error(self) -> GatewayError {
        match self {
            BrokerErrorBody::Detailed { code, message } => GatewayError::Broker { code, message },
            BrokerErrorBody::Message(message) => GatewayError::Broker { code: 0, message },
            BrokerErrorBody::Other(value) => GatewayError::Broker {
                code: 0,
                message: value.to_string(),
            },
        }
    }
}

/// Sends commands to the broker.
///
/// Implementations perform exactly one attempt per call and never retry.
#[async_trait]
pub trait BrokerTransport: Send + Sync + std::fmt::Debug + 'static {
    /// Sends a publish command and returns the broker's reply.
    ///
    /// A reply carrying an error field is still `Ok`; interpreting it is the
    /// gateway's job.
    async fn publish(&self, command: &PublishCommand) -> Result<BrokerReply, GatewayError>;
}
