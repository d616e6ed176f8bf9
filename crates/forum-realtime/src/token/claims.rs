//! Claims embedded in broker tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims payload of a connection or subscription token.
///
/// Connection tokens carry only `sub` and `exp`. Subscription tokens also
/// name the `channel` they grant access to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the forum user id, empty for anonymous visitors.
    pub sub: String,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Channel the token is scoped to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

impl TokenClaims {
    /// Claims for a connection token.
    pub fn connection(subject: Option<&str>, exp: i64) -> Self {
        Self {
            sub: subject.unwrap_or_default().to_string(),
            exp,
            channel: None,
        }
    }

    /// Claims for a subscription token on `channel`.
    pub fn subscription(channel: &str, subject: Option<&str>, exp: i64) -> Self {
        Self {
            sub: subject.unwrap_or_default().to_string(),
            exp,
            channel: Some(channel.to_string()),
        }
    }

    /// Returns `true` when no user is attached.
    pub fn is_anonymous(&self) -> bool {
        self.sub.is_empty()
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
