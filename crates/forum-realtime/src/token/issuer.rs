//! Signs short-lived broker credentials with the shared HMAC secret.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use forum_core::config::CentrifugeConfig;
use forum_core::error::AppError;

use super::claims::TokenClaims;

/// Issues HS256 connection and subscription tokens.
///
/// Stateless: holds only the signing key and TTL, so a single instance can
/// be shared by any number of concurrent callers. Tokens are never stored,
/// refreshed, or revoked here.
#[derive(Clone)]
pub struct TokenIssuer {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime.
    ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl_seconds", &self.ttl.num_seconds())
            .finish()
    }
}

impl TokenIssuer {
    /// Creates an issuer from broker configuration.
    ///
    /// Fails with a configuration error when the secret is empty or the TTL
    /// is not positive.
    pub fn from_config(config: &CentrifugeConfig) -> Result<Self, AppError> {
        config.validate_signing()?;
        let ttl = Duration::try_seconds(config.token_ttl_seconds).ok_or_else(|| {
            AppError::configuration(format!(
                "centrifuge.token_ttl_seconds is out of range: {}",
                config.token_ttl_seconds
            ))
        })?;
        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            ttl,
        })
    }

    /// Returns the configured token lifetime in seconds.
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl.num_seconds()
    }

    /// Issues a connection token for `subject` (anonymous when `None`).
    ///
    /// Claims: `{"sub": subject or "", "exp": now + ttl}`.
    pub fn issue_connection_token(&self, subject: Option<&str>) -> Result<String, AppError> {
        let claims = TokenClaims::connection(subject, self.expiry()?);
        self.sign(&claims)
    }

    /// Issues a subscription token granting `subject` access to `channel`.
    ///
    /// Claims: `{"sub": subject or "", "channel": channel, "exp": now + ttl}`.
    pub fn issue_subscription_token(
        &self,
        channel: &str,
        subject: Option<&str>,
    ) -> Result<String, AppError> {
        if channel.is_empty() {
            return Err(AppError::validation(
                "Subscription token requires a channel",
            ));
        }
        let claims = TokenClaims::subscription(channel, subject, self.expiry()?);
        self.sign(&claims)
    }

    fn expiry(&self) -> Result<i64, AppError> {
        Utc::now()
            .checked_add_signed(self.ttl)
            .map(|exp| exp.timestamp())
            .ok_or_else(|| AppError::configuration("Token expiry overflows the calendar range"))
    }

    fn sign(&self, claims: &TokenClaims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode broker token: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

    const SECRET: &str = "test-secret";

    fn issuer(ttl: i64) -> TokenIssuer {
        let config = CentrifugeConfig {
            secret: SECRET.into(),
            token_ttl_seconds: ttl,
            ..Default::default()
        };
        TokenIssuer::from_config(&config).expect("valid config")
    }

    fn decode_claims(token: &str) -> TokenClaims {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &validation,
        )
        .expect("token should verify with the shared secret")
        .claims
    }

    #[test]
    fn test_missing_secret_is_configuration_error() {
        let err = TokenIssuer::from_config(&CentrifugeConfig::default()).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_zero_ttl_is_configuration_error() {
        let config = CentrifugeConfig {
            secret: SECRET.into(),
            token_ttl_seconds: 0,
            ..Default::default()
        };
        assert!(TokenIssuer::from_config(&config).unwrap_err().is_configuration());
    }

    #[test]
    fn test_anonymous_connection_token() {
        let before = Utc::now().timestamp();
        let token = issuer(300).issue_connection_token(None).unwrap();
        let after = Utc::now().timestamp();

        let claims = decode_claims(&token);
        assert_eq!(claims.sub, "");
        assert!(claims.channel.is_none());
        assert!(claims.exp >= before + 300 && claims.exp <= after + 300);
        assert!(claims.exp > after);
    }

    #[test]
    fn test_connection_token_embeds_subject() {
        let token = issuer(60).issue_connection_token(Some("17")).unwrap();
        let claims = decode_claims(&token);
        assert_eq!(claims.sub, "17");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_connection_token_has_only_sub_and_exp() {
        let token = issuer(60).issue_connection_token(Some("17")).unwrap();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        let raw = decode::<serde_json::Value>(
            &token,
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &validation,
        )
        .unwrap()
        .claims;

        let keys: Vec<&str> = raw.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&"sub") && keys.contains(&"exp"));
    }

    #[test]
    fn test_subscription_token_embeds_channel() {
        let before = Utc::now().timestamp();
        let token = issuer(120)
            .issue_subscription_token("question:42", Some("5"))
            .unwrap();
        let after = Utc::now().timestamp();

        let claims = decode_claims(&token);
        assert_eq!(claims.sub, "5");
        assert_eq!(claims.channel.as_deref(), Some("question:42"));
        assert!(claims.exp >= before + 120 && claims.exp <= after + 120);
    }

    #[test]
    fn test_subscription_token_requires_channel() {
        let err = issuer(60).issue_subscription_token("", None).unwrap_err();
        assert_eq!(err.kind, forum_core::error::ErrorKind::Validation);
    }

    #[test]
    fn test_wrong_secret_fails_verification() {
        let token = issuer(60).issue_connection_token(None).unwrap();
        let result = decode::<TokenClaims>(
            &token,
            &DecodingKey::from_secret(b"another-secret"),
            &Validation::new(Algorithm::HS256),
        );
        assert!(result.is_err());
    }
}
