//! Caller identity configuration.

use serde::{Deserialize, Serialize};

/// How the token endpoint learns which forum user is calling.
///
/// Two sources are honored, in order:
/// 1. a forum session JWT in `Authorization: Bearer ...`, verified with
///    `session_secret`;
/// 2. the `user_header` set by the reverse proxy, only when the request also
///    carries `X-Forum-Proxy-Key` equal to `proxy_key`.
///
/// With both left empty every caller is anonymous.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret of the forum's session tokens. Empty disables bearer auth.
    #[serde(default)]
    pub session_secret: String,
    /// Shared key the reverse proxy sends with the user header. Empty
    /// disables the header.
    #[serde(default)]
    pub proxy_key: String,
    /// Header carrying the user id when set by the proxy.
    #[serde(default = "default_user_header")]
    pub user_header: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: String::new(),
            proxy_key: String::new(),
            user_header: default_user_header(),
        }
    }
}

impl AuthConfig {
    /// Whether bearer session tokens are verified.
    pub fn session_enabled(&self) -> bool {
        !self.session_secret.is_empty()
    }

    /// Whether the proxy user header can be honored at all.
    pub fn proxy_enabled(&self) -> bool {
        !self.proxy_key.is_empty()
    }
}

fn default_user_header() -> String {
    "x-forum-user-id".to_string()
}
