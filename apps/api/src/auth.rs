//! Caller identity. Authentication happens upstream; the gateway forwards the
//! authenticated user's external id in a trusted header (`AUTH_USER_HEADER`).

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::errors::AppError;
use crate::state::AppState;

/// External identity of the caller, as issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity(pub String);

impl CallerIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CallerIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        caller_from_headers(&parts.headers, &state.config.auth_user_header).ok_or_else(|| {
            tracing::debug!("rejecting request without {} header", state.config.auth_user_header);
            AppError::Unauthorized
        })
    }
}

/// Reads the caller id from `header`. Missing, non-UTF-8 or blank values yield `None`.
pub fn caller_from_headers(headers: &HeaderMap, header: &str) -> Option<CallerIdentity> {
    headers
        .get(header)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| CallerIdentity(v.to_string()))
}
