//! `InternalCaller` extractor: guards endpoints meant for the forum backend.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use forum_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the shared internal key.
pub const INTERNAL_KEY_HEADER: &str = "x-internal-key";

/// Proof that the request came from the forum backend.
///
/// When `server.internal_api_key` is empty every caller is accepted.
#[derive(Debug, Clone, Copy)]
pub struct InternalCaller;

impl FromRequestParts<AppState> for InternalCaller {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let expected = state.config.server.internal_api_key.as_str();
        if expected.is_empty() {
            return Ok(InternalCaller);
        }

        let provided = parts
            .headers
            .get(INTERNAL_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing X-Internal-Key header"))?;

        if provided != expected {
            return Err(AppError::unauthorized("Invalid internal key").into());
        }

        Ok(InternalCaller)
    }
}
