use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use shared::{LoginRequest, LoginResponse, SuccessResponse, TokenRequest};
use tracing::info;

use crate::{
    auth::{auth_cookie, clear_auth_cookie, encode_jwt},
    config::Config,
    database::{user_repository::UserRepository, Database},
    error::AppError,
};

/// Issue a 7-day token for an already-registered uid.
pub async fn login(
    State(db): State<Database>,
    State(config): State<Config>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    info!("[AUTH] Login attempt for {}", req.uid);

    let user = UserRepository::find_by_uid(&db, &req.uid)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let token = encode_jwt(&user.uid, &user.email, &user.role, &config.jwt_secret)
        .map_err(AppError::Internal)?;

    info!("[AUTH] ✅ Token issued for {} ({})", user.uid, user.role);
    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

/// Sign a token for the posted identity and set it as the auth cookie.
pub async fn issue_token(
    State(config): State<Config>,
    jar: CookieJar,
    Json(req): Json<TokenRequest>,
) -> Result<(CookieJar, Json<SuccessResponse>), AppError> {
    let role = req.role.unwrap_or_else(|| "student".to_string());
    let token =
        encode_jwt(&req.uid, &req.email, &role, &config.jwt_secret).map_err(AppError::Internal)?;

    info!("[AUTH] Cookie token set for {}", req.uid);
    Ok((
        jar.add(auth_cookie(token, config.production)),
        Json(SuccessResponse { success: true }),
    ))
}

/// Clear the auth cookie.
pub async fn logout(
    State(config): State<Config>,
    jar: CookieJar,
) -> (CookieJar, Json<SuccessResponse>) {
    info!("[AUTH] Logging out");
    (
        jar.remove(clear_auth_cookie(config.production)),
        Json(SuccessResponse { success: true }),
    )
}
