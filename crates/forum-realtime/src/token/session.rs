//! Verifies forum session tokens presented by browsers.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use forum_core::config::AuthConfig;
use forum_core::error::AppError;

/// Claims the forum puts in its session tokens. Extra claims are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Forum user id.
    pub sub: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Checks HS256 session tokens signed with `auth.session_secret`.
#[derive(Clone)]
pub struct SessionVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for SessionVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl SessionVerifier {
    /// Creates a verifier for `secret`.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Builds a verifier when session auth is configured, `None` otherwise.
    pub fn from_config(config: &AuthConfig) -> Option<Self> {
        config
            .session_enabled()
            .then(|| Self::new(&config.session_secret))
    }

    /// Verifies `token` and returns its claims.
    ///
    /// Bad signatures, expired tokens and blank subjects are `Unauthorized`.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AppError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::unauthorized(format!("Invalid session token: {e}")))?;

        if data.claims.sub.trim().is_empty() {
            return Err(AppError::unauthorized("Session token has no subject"));
        }
        Ok(data.claims)
    }
}
