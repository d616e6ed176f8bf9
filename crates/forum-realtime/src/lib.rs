//! # forum-realtime
//!
//! Bridges the forum to an external pub/sub broker (Centrifugo). Provides:
//!
//! - `token`: signed, time-limited connection and subscription tokens, and
//!   verification of the forum's session tokens
//! - `channel`: channel naming rules and resolution of channel names
//! - `gateway`: best-effort publishing over the broker's HTTP API
//! - `publisher`: domain-facing entry point that picks the channel and publishes
//! - `urls`: broker HTTP, API, and WebSocket URL derivation

pub mod channel;
pub mod event;
pub mod gateway;
pub mod publisher;
pub mod token;
pub mod urls;

#[cfg(test)]
pub(crate) mod test_support;

pub use channel::{ChannelKind, ChannelRegistry, ResolvedChannel};
pub use event::PublishEvent;
pub use gateway::{BrokerGateway, BrokerTransport, GatewayError, HttpBrokerTransport};
pub use publisher::EventPublisher;
pub use token::{SessionClaims, SessionVerifier, TokenClaims, TokenIssuer};
pub use urls::BrokerUrls;
