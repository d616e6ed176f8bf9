//! Channel naming rules.

pub mod registry;
pub mod types;

pub use registry::{ChannelRegistry, ResolvedChannel};
pub use types::ChannelKind;
