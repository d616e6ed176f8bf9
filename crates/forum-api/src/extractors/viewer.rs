//! `Viewer` extractor: the forum user making the request, if any.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::state::AppState;

/// Header the reverse proxy sends alongside the user header.
pub const PROXY_KEY_HEADER: &str = "x-forum-proxy-key";

/// The requesting forum user, if the request proves who it is.
///
/// Identity comes from a verified session bearer token, or from the user
/// header when the request also carries the proxy key. Anything else,
/// including a user header without the key, is an anonymous visitor. Never
/// rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    /// Forum user id, `None` for anonymous visitors.
    pub user_id: Option<String>,
}

impl Viewer {
    /// Anonymous visitor.
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    /// Returns the user id as a token subject.
    pub fn subject(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}

impl FromRequestParts<AppState> for Viewer {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user_id) = from_session(parts, state) {
            return Ok(Viewer {
                user_id: Some(user_id),
            });
        }

        if let Some(user_id) = from_proxy(parts, state) {
            return Ok(Viewer {
                user_id: Some(user_id),
            });
        }

        Ok(Viewer::anonymous())
    }
}

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn from_session(parts: &Parts, state: &AppState) -> Option<String> {
    let verifier = state.session_verifier.as_ref()?;
    let token = header(parts, AUTHORIZATION.as_str())?.strip_prefix("Bearer ")?;

    match verifier.verify(token.trim()) {
        Ok(claims) => Some(claims.sub),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring invalid session token");
            None
        }
    }
}

fn from_proxy(parts: &Parts, state: &AppState) -> Option<String> {
    let auth = &state.config.auth;
    let user_id = header(parts, auth.user_header.as_str())?;

    if !auth.proxy_enabled() || header(parts, PROXY_KEY_HEADER) != Some(auth.proxy_key.as_str()) {
        tracing::debug!(header = %auth.user_header, "Ignoring unverified user header");
        return None;
    }

    Some(user_id.to_string())
}
