//! Request DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use forum_realtime::ChannelKind;

/// Body of `POST /centrifugo/notify/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyRequest {
    /// Event type, e.g. `"new_answer"`.
    pub event_type: String,
    /// Kind of resource the event concerns.
    pub owner_type: ChannelKind,
    /// Id of that resource.
    pub owner_id: u64,
    /// Event payload.
    #[serde(default)]
    pub payload: Value,
}
