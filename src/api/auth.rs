use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::debug;

use crate::models::{AppError, AppState, TokenClaims};

const INVALID_TOKEN: &str = "Invalid or missing token";

/// Extractor que valida el token bearer y expone sus claims al handler
#[derive(Debug)]
pub struct AuthUser(pub TokenClaims);

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized(INVALID_TOKEN))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized(INVALID_TOKEN))?;

        let claims = TokenClaims::verify(token, &state.secret, &state.issuer).map_err(|e| {
            debug!("Token rechazado: {}", e);
            AppError::unauthorized(INVALID_TOKEN)
        })?;

        Ok(AuthUser(claims))
    }
}
