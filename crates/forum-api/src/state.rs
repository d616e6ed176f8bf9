//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use forum_core::config::AppConfig;
use forum_core::error::AppError;
use forum_realtime::{BrokerGateway, BrokerUrls, EventPublisher, SessionVerifier, TokenIssuer};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Broker token issuer
    pub token_issuer: Arc<TokenIssuer>,
    /// Domain event publisher (owns the shared broker gateway)
    pub publisher: Arc<EventPublisher>,
    /// Derived broker URLs
    pub broker_urls: Arc<BrokerUrls>,
    /// Forum session token verifier, when session auth is configured
    pub session_verifier: Option<Arc<SessionVerifier>>,
}

impl AppState {
    /// Builds the state from configuration.
    ///
    /// Fails when the signing secret or broker settings are unusable, so a
    /// misconfigured server never starts.
    pub fn from_config(config: AppConfig) -> Result<Self, AppError> {
        let gateway = Arc::new(BrokerGateway::from_config(&config.centrifuge)?);
        Self::with_gateway(config, gateway)
    }

    /// Builds the state around an already-constructed gateway.
    pub fn with_gateway(config: AppConfig, gateway: Arc<BrokerGateway>) -> Result<Self, AppError> {
        let token_issuer = TokenIssuer::from_config(&config.centrifuge)?;
        let broker_urls = BrokerUrls::from_config(&config.centrifuge);
        let session_verifier = SessionVerifier::from_config(&config.auth).map(Arc::new);

        Ok(Self {
            config: Arc::new(config),
            token_issuer: Arc::new(token_issuer),
            publisher: Arc::new(EventPublisher::new(gateway)),
            broker_urls: Arc::new(broker_urls),
            session_verifier,
        })
    }
}
