//! Admin authorization middleware.
//!
//! The moderation surface is gated on a valid token whose `role` claim is
//! `admin`. The token is read from the `Authorization: Bearer` header
//! first, falling back to the `token` cookie the front-end stores after
//! `/jwt`. Validated claims are injected into request extensions.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use tracing::{debug, warn};

use crate::{
    auth::{decode_jwt, TOKEN_COOKIE},
    config::Config,
    error::AppError,
};

pub async fn require_admin(
    State(config): State<Config>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers())
        .or_else(|| jar.get(TOKEN_COOKIE).map(|cookie| cookie.value().to_string()))
        .ok_or_else(|| {
            warn!("[AUTH] Missing credentials for admin route");
            AppError::Unauthorized("Missing authentication token".to_string())
        })?;

    let claims = decode_jwt(&token, &config.jwt_secret).map_err(|e| {
        warn!("[AUTH] Token validation failed: {}", e);
        AppError::Unauthorized("Invalid authentication token".to_string())
    })?;

    if claims.role != "admin" {
        warn!("[AUTH] {} attempted admin route with role {}", claims.sub, claims.role);
        return Err(AppError::Forbidden("Admin role required".to_string()));
    }

    debug!("[AUTH] Admin request by {}", claims.sub);
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
}
