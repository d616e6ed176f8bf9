//! Events dispatched to broker channels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event type sent when an answer is posted to a question.
pub const NEW_ANSWER: &str = "new_answer";

/// The unit handed to the broker: a typed payload bound for one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishEvent {
    /// Target channel name.
    pub channel: String,
    /// Event type, e.g. `"new_answer"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Arbitrary structured payload.
    pub payload: Value,
}

impl PublishEvent {
    /// Creates an event for `channel`.
    pub fn new(channel: impl Into<String>, event_type: impl Into<String>, payload: Value) -> Self {
        Self {
            channel: channel.into(),
            event_type: event_type.into(),
            payload,
        }
    }

    /// The publication data subscribers receive: `{"type": ..., "payload": ...}`.
    pub fn data(&self) -> Value {
        serde_json::json!({
            "type": self.event_type,
            "payload": self.payload,
        })
    }
}

/// Payload of a [`NEW_ANSWER`] event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAnswer {
    /// Answer id.
    pub answer_id: u64,
    /// Question the answer belongs to.
    pub question_id: u64,
    /// Display name of the author.
    pub author: String,
    /// Answer body.
    pub text: String,
    /// Whether the answer is marked correct.
    #[serde(default)]
    pub is_correct: bool,
    /// Current rating.
    #[serde(default)]
    pub rating: i64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}
