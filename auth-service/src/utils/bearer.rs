use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use chrono::Utc;
use log::{debug, warn};

use crate::app_state::AppState;
use crate::domain::Claim;
use crate::errors::ContentsError;

use super::consts::BEARER_SCHEME;

/// Extractor for routes that require a valid bearer token.
///
/// Reads `Authorization: Bearer <token>` and verifies it against the current
/// time. A missing header and every verification failure reject with the same
/// `401`.
#[derive(Debug, Clone)]
pub struct BearerClaim(pub Claim);

impl FromRequestParts<AppState> for BearerClaim {
    type Rejection = ContentsError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(|| {
            debug!("request without a bearer token");
            ContentsError::Unauthorized
        })?;

        state
            .token_verifier
            .verify(token, Utc::now())
            .map(BearerClaim)
            .map_err(|failure| {
                warn!("rejected bearer token: {}", failure);
                ContentsError::Unauthorized
            })
    }
}

/// The token from an `Authorization: Bearer <token>` header, if there is one.
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
