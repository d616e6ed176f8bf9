//! Route definitions.
//!
//! Broker routes are mounted under `/centrifugo`, matching the path the
//! forum front-end already calls.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/centrifugo", centrifugo_routes())
        .merge(health_routes())
        .with_state(state)
}

/// Broker token, settings, and internal notify endpoints
fn centrifugo_routes() -> Router<AppState> {
    Router::new()
        .route("/token/", get(handlers::centrifugo::connection_token))
        .route("/settings/", get(handlers::centrifugo::settings))
        .route("/notify/", post(handlers::centrifugo::notify))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
