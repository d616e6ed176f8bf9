//! Domain event → broker channel publishing.
//!
//! The entry point forum code uses when something happens that subscribers
//! should hear about. Callers name the resource; the channel naming rules
//! stay here.

use std::sync::Arc;

use serde_json::Value;
use tokio::task::JoinHandle;

use crate::channel::{ChannelKind, ChannelRegistry};
use crate::event::{NEW_ANSWER, NewAnswer, PublishEvent};
use crate::gateway::BrokerGateway;

/// Publishes domain events to the channel of the resource they concern.
#[derive(Debug, Clone)]
pub struct EventPublisher {
    /// Shared broker gateway.
    gateway: Arc<BrokerGateway>,
    /// Channel naming rules.
    registry: ChannelRegistry,
}

impl EventPublisher {
    /// Create a new publisher over the shared gateway.
    pub fn new(gateway: Arc<BrokerGateway>) -> Self {
        Self {
            gateway,
            registry: ChannelRegistry::default(),
        }
    }

    /// The underlying gateway.
    pub fn gateway(&self) -> &BrokerGateway {
        &self.gateway
    }

    /// The channel naming rules in use.
    pub fn registry(&self) -> &ChannelRegistry {
        &self.registry
    }

    /// Publish `payload` as `event_type` on the channel of `owner` `owner_id`.
    ///
    /// Returns whether the broker acknowledged the event. Each call is one
    /// independent attempt; nothing is deduplicated or retried.
    pub async fn notify(
        &self,
        event_type: &str,
        owner: ChannelKind,
        owner_id: u64,
        payload: Value,
    ) -> bool {
        let channel = owner.make_channel_name(owner_id);
        if self.registry.match_channel(owner, &channel).is_none() {
            tracing::warn!(
                channel = %channel,
                owner = %owner,
                "Channel kind is not registered, event dropped"
            );
            return false;
        }

        let event = PublishEvent::new(channel, event_type, payload);
        self.gateway.publish(&event).await
    }

    /// Announce a newly posted answer on its question's channel.
    pub async fn new_answer(&self, answer: &NewAnswer) -> bool {
        let payload = match serde_json::to_value(answer) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(
                    answer_id = answer.answer_id,
                    error = %e,
                    "Failed to serialize new answer event"
                );
                return false;
            }
        };
        self.notify(NEW_ANSWER, ChannelKind::Question, answer.question_id, payload)
            .await
    }

    /// Like [`notify`](Self::notify), but runs on a background task so the
    /// caller does not wait for the broker.
    pub fn notify_in_background(
        &self,
        event_type: impl Into<String>,
        owner: ChannelKind,
        owner_id: u64,
        payload: Value,
    ) -> JoinHandle<bool> {
        let publisher = self.clone();
        let event_type = event_type.into();
        tokio::spawn(async move {
            publisher
                .notify(&event_type, owner, owner_id, payload)
                .await
        })
    }
}
