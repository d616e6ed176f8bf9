//! Request handlers.

pub mod centrifugo;
pub mod health;
