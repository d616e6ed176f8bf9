//! Best-effort publishing to the external broker.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;

pub use client::BrokerGateway;
pub use error::GatewayError;
pub use http::HttpBrokerTransport;
pub use transport::{BrokerErrorBody, BrokerReply, BrokerTransport, PublishCommand};
