//! Broker gateway: the one place publish failures are absorbed.

use std::sync::Arc;

use forum_core::config::CentrifugeConfig;
use forum_core::error::AppError;

use crate::event::PublishEvent;

use super::error::GatewayError;
use super::http::HttpBrokerTransport;
use super::transport::{BrokerTransport, PublishCommand};

/// Publishes events to the broker on a best-effort basis.
///
/// Built once at startup and shared by reference. Holds only read-only
/// configuration and a stateless transport, so concurrent callers need no
/// locking.
#[derive(Debug, Clone)]
pub struct BrokerGateway {
    /// Master switch from configuration.
    enabled: bool,
    /// Transport to the broker; `None` when no broker is attached.
    transport: Option<Arc<dyn BrokerTransport>>,
}

impl BrokerGateway {
    /// Creates a gateway over an explicit transport.
    pub fn new(enabled: bool, transport: Arc<dyn BrokerTransport>) -> Self {
        Self {
            enabled,
            transport: Some(transport),
        }
    }

    /// Creates a gateway that never publishes.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            transport: None,
        }
    }

    /// Creates a gateway from configuration, with an HTTP transport when enabled.
    ///
    /// Fails with a configuration error when enabled without a usable host
    /// or timeout.
    pub fn from_config(config: &CentrifugeConfig) -> Result<Self, AppError> {
        if !config.enabled {
            tracing::info!("Broker publishing is disabled");
            return Ok(Self::disabled());
        }

        let transport = HttpBrokerTransport::from_config(config)?;
        tracing::info!(api_url = %transport.api_url(), "Broker gateway configured");
        Ok(Self::new(true, Arc::new(transport)))
    }

    /// Whether publishing is switched on.
    pub fn is_enabled(&self) -> bool {
        self.enabled && self.transport.is_some()
    }

    /// Publishes `event`, returning `true` only when the broker acknowledged
    /// it without an error.
    ///
    /// Never fails: disabled publishing, transport errors, timeouts, and
    /// broker-reported errors are logged and reported as `false`. No retry.
    pub async fn publish(&self, event: &PublishEvent) -> bool {
        match self.try_publish(event).await {
            Ok(()) => true,
            Err(GatewayError::Disabled) => {
                tracing::debug!(
                    channel = %event.channel,
                    event_type = %event.event_type,
                    "Broker disabled, event dropped"
                );
                false
            }
            Err(err) => {
                tracing::error!(
                    channel = %event.channel,
                    event_type = %event.event_type,
                    cause = err.label(),
                    error = %err,
                    "Failed to publish to broker"
                );
                false
            }
        }
    }

    /// Publishes `event` and reports the precise failure cause.
    pub async fn try_publish(&self, event: &PublishEvent) -> Result<(), GatewayError> {
        let transport = match (&self.transport, self.enabled) {
            (Some(transport), true) => transport,
            _ => return Err(GatewayError::Disabled),
        };

        let command = PublishCommand {
            channel: event.channel.clone(),
            data: event.data(),
        };

        let reply = transport.publish(&command).await?;
        if let Some(error) = reply.error {
            return Err(error.into_error());
        }

        tracing::debug!(
            channel = %event.channel,
            event_type = %event.event_type,
            "Published to broker"
        );
        Ok(())
    }
}
