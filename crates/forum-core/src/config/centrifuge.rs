//! Broker (Centrifugo) connection and token signing configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Settings for the external pub/sub broker and the credentials issued for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CentrifugeConfig {
    /// Master switch. When off, publishing is a no-op.
    #[serde(default)]
    pub enabled: bool,
    /// Broker base URL, e.g. `http://localhost:8000`.
    #[serde(default)]
    pub host: String,
    /// Optional path prefix the broker is mounted under.
    #[serde(default)]
    pub url_prefix: String,
    /// Key sent with every administrative API call.
    #[serde(default)]
    pub api_key: String,
    /// Symmetric HMAC secret shared with the broker for token verification.
    #[serde(default)]
    pub secret: String,
    /// Token lifetime in seconds.
    #[serde(default = "default_token_ttl", alias = "token_ttl")]
    pub token_ttl_seconds: i64,
    /// Outbound HTTP timeout in seconds.
    #[serde(default = "default_timeout", alias = "timeout")]
    pub timeout_seconds: f64,
}

impl Default for CentrifugeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: String::new(),
            url_prefix: String::new(),
            api_key: String::new(),
            secret: String::new(),
            token_ttl_seconds: default_token_ttl(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl CentrifugeConfig {
    /// Checks the settings needed to sign tokens.
    pub fn validate_signing(&self) -> Result<(), AppError> {
        if self.secret.trim().is_empty() {
            return Err(AppError::configuration("centrifuge.secret is not set"));
        }
        if self.token_ttl_seconds <= 0 {
            return Err(AppError::configuration(format!(
                "centrifuge.token_ttl_seconds must be positive, got {}",
                self.token_ttl_seconds
            )));
        }
        Ok(())
    }

    /// Checks the settings needed to reach the broker.
    ///
    /// A disabled broker is always valid.
    pub fn validate_broker(&self) -> Result<(), AppError> {
        if !self.enabled {
            return Ok(());
        }
        if self.host.trim().is_empty() {
            return Err(AppError::configuration(
                "centrifuge.host must be set when centrifuge.enabled is true",
            ));
        }
        if !self.timeout_seconds.is_finite() || self.timeout_seconds <= 0.0 {
            return Err(AppError::configuration(format!(
                "centrifuge.timeout_seconds must be a positive number, got {}",
                self.timeout_seconds
            )));
        }
        Ok(())
    }

    /// Returns the outbound timeout as a `Duration`.
    ///
    /// Call [`validate_broker`](Self::validate_broker) first; invalid values
    /// fall back to the default.
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::try_from_secs_f64(self.timeout_seconds)
            .unwrap_or_else(|_| std::time::Duration::from_secs_f64(default_timeout()))
    }
}

fn default_token_ttl() -> i64 {
    3600
}

fn default_timeout() -> f64 {
    1.0
}
