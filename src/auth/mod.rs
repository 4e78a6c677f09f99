//! Admin authorization
//!
//! The catalog only distinguishes "authorized or not": mutating
//! handlers take an [`AdminSession`] extractor that compares the
//! bearer token against the configured admin token. Token issuance and
//! session mechanics live outside this service.

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::core::ServerState;
use crate::utils::AppError;

/// Proof that the caller holds the admin token. With no token
/// configured the check is disabled (development).
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

impl FromRequestParts<ServerState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.admin_token.as_deref() else {
            return Ok(AdminSession);
        };

        let supplied = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match supplied {
            Some(token) if token == expected => Ok(AdminSession),
            _ => Err(AppError::Unauthorized),
        }
    }
}
