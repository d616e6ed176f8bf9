//! # forum-api
//!
//! HTTP API layer built on Axum.
//!
//! Serves broker connection tokens to browsers, exposes the broker WebSocket
//! URL, accepts internal notify calls from the forum, and maps [`AppError`]
//! to HTTP responses.
//!
//! [`AppError`]: forum_core::AppError

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod telemetry;

pub use app::{build_app, run_server};
pub use state::AppState;
pub use telemetry::init_logging;
